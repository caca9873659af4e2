//! Chat-completions adapter
//!
//! This module owns the request/response mapping between the conversation log
//! and the external gateway: one POST per user action, the full history in
//! the body, the first choice's content back out. The adapter keeps no state
//! between invocations; appending the reply to the log is the caller's job.
//!
//! The call is at-most-one-shot. There is no retry, no backoff, and no
//! timeout beyond the HTTP client's built-in default.

pub mod error;
pub mod models;

pub use error::ApiError;

use crate::api::models::{ChatMessage, ChatRequest, ChatResponse};
use crate::core::message::Message;

/// Fixed gateway endpoint; the client talks to OpenRouter only.
pub const CHAT_COMPLETIONS_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

// Static identification headers shown on the gateway's usage dashboards.
const APP_REFERER: &str = "https://permacommons.org/parley";
const APP_TITLE: &str = "Parley";

/// Send the full message history to the gateway and return the assistant's
/// reply as a new [`Message`].
///
/// A missing (or empty) credential fails with [`ApiError::MissingCredential`]
/// before any request is built or issued.
pub async fn send_chat_message(
    client: &reqwest::Client,
    api_key: Option<&str>,
    model: &str,
    messages: Vec<ChatMessage>,
) -> Result<Message, ApiError> {
    let api_key = api_key
        .filter(|key| !key.is_empty())
        .ok_or(ApiError::MissingCredential)?;

    let request = ChatRequest {
        model: model.to_string(),
        messages,
    };

    tracing::debug!(
        model,
        history_len = request.messages.len(),
        "sending chat request"
    );

    let response = client
        .post(CHAT_COMPLETIONS_URL)
        .header("Authorization", format!("Bearer {api_key}"))
        .header("Content-Type", "application/json")
        .header("HTTP-Referer", APP_REFERER)
        .header("X-Title", APP_TITLE)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    tracing::debug!(status = status.as_u16(), "chat response received");

    decode_chat_response(status, &body)
}

/// Map a raw gateway response to an assistant message or a typed failure.
///
/// Split out from the transport so the mapping is testable without a live
/// server: non-success status wins over body parsing, a body that is not the
/// expected JSON is malformed, and a parsed body without a usable first
/// choice is a distinct "no answer" case.
pub fn decode_chat_response(
    status: reqwest::StatusCode,
    body: &str,
) -> Result<Message, ApiError> {
    if !status.is_success() {
        return Err(ApiError::Api {
            status: status.as_u16(),
            body: body.trim().to_string(),
        });
    }

    let response: ChatResponse = serde_json::from_str(body)?;
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(ApiError::EmptyChoices)?;

    Ok(Message::assistant(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn successful_response_yields_assistant_message() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"X"}}]}"#;
        let reply = decode_chat_response(StatusCode::OK, body).unwrap();
        assert!(reply.is_assistant());
        assert_eq!(reply.content, "X");
    }

    #[test]
    fn caller_appends_the_reply_to_the_log() {
        use crate::core::conversation::ConversationLog;

        let mut log = ConversationLog::new();
        log.append(Message::user("hi"));

        let body = r#"{"choices":[{"message":{"role":"assistant","content":"X"}}]}"#;
        let reply = decode_chat_response(StatusCode::OK, body).unwrap();
        log.append(reply);

        assert_eq!(log.len(), 2);
        let last = log.last().unwrap();
        assert!(last.is_assistant());
        assert_eq!(last.content, "X");
    }

    #[test]
    fn only_the_first_choice_is_used() {
        let body = r#"{"choices":[
            {"message":{"content":"first"}},
            {"message":{"content":"second"}}
        ]}"#;
        let reply = decode_chat_response(StatusCode::OK, body).unwrap();
        assert_eq!(reply.content, "first");
    }

    #[test]
    fn empty_choices_is_a_distinct_failure() {
        let body = r#"{"choices":[]}"#;
        let err = decode_chat_response(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, ApiError::EmptyChoices));
    }

    #[test]
    fn absent_choices_reads_as_empty() {
        let err = decode_chat_response(StatusCode::OK, "{}").unwrap_err();
        assert!(matches!(err, ApiError::EmptyChoices));
    }

    #[test]
    fn choice_without_content_is_no_answer() {
        let body = r#"{"choices":[{"message":{"role":"assistant"}}]}"#;
        let err = decode_chat_response(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, ApiError::EmptyChoices));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = decode_chat_response(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[test]
    fn non_success_status_is_reported_with_the_body() {
        let err = decode_chat_response(StatusCode::UNAUTHORIZED, "bad key").unwrap_err();
        match err {
            ApiError::Api { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "bad key");
            }
            other => panic!("expected ApiError::Api, got {other:?}"),
        }
    }

    #[test]
    fn error_status_wins_over_body_parsing() {
        // A well-formed completions body still fails on a 500.
        let body = r#"{"choices":[{"message":{"content":"X"}}]}"#;
        let err = decode_chat_response(StatusCode::INTERNAL_SERVER_ERROR, body).unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn missing_credential_never_issues_a_request() {
        let client = reqwest::Client::new();
        let err = send_chat_message(&client, None, "openai/gpt-3.5-turbo", Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingCredential));
    }

    #[tokio::test]
    async fn empty_credential_counts_as_missing() {
        let client = reqwest::Client::new();
        let err = send_chat_message(&client, Some(""), "openai/gpt-3.5-turbo", Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingCredential));
    }
}
