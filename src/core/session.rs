//! Per-session context
//!
//! One `SessionContext` exists per interactive session. It owns the HTTP
//! client, the in-memory credential, the selected model, and the conversation
//! log, and is passed by reference into the chat loop. The credential lives
//! only here: it is never written to config or any other file.

use reqwest::Client;

use crate::api::{self, ApiError};
use crate::core::conversation::ConversationLog;
use crate::core::message::Message;
use crate::core::registry::ModelSpec;

pub struct SessionContext {
    pub client: Client,
    api_key: Option<String>,
    model: ModelSpec,
    pub conversation: ConversationLog,
}

impl SessionContext {
    pub fn new(model: ModelSpec, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|key| !key.is_empty()),
            model,
            conversation: ConversationLog::new(),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Replace the session credential. Empty input clears it.
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key).filter(|k| !k.is_empty());
    }

    pub fn model(&self) -> &ModelSpec {
        &self.model
    }

    pub fn set_model(&mut self, model: ModelSpec) {
        self.model = model;
    }

    /// Issue one chat-completions call for the current history. The log is
    /// not touched here; appending the reply is the caller's responsibility,
    /// so a failed call leaves the conversation exactly as it was.
    pub async fn send(&self) -> Result<Message, ApiError> {
        api::send_chat_message(
            &self.client,
            self.api_key.as_deref(),
            &self.model.api_id,
            self.conversation.api_messages(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::ModelRegistry;

    fn test_session(api_key: Option<&str>) -> SessionContext {
        let registry = ModelRegistry::builtin();
        SessionContext::new(registry.default_model().clone(), api_key.map(String::from))
    }

    #[test]
    fn blank_credentials_are_treated_as_absent() {
        assert!(!test_session(None).has_credential());
        assert!(!test_session(Some("")).has_credential());
        assert!(test_session(Some("sk-or-test")).has_credential());

        let mut session = test_session(None);
        session.set_api_key("sk-or-test".to_string());
        assert!(session.has_credential());
        session.set_api_key(String::new());
        assert!(!session.has_credential());
    }

    #[test]
    fn switching_models_keeps_the_conversation() {
        let registry = ModelRegistry::builtin();
        let mut session = test_session(Some("sk-or-test"));
        session.conversation.append(Message::user("hi"));

        session.set_model(registry.find("claude-instant").unwrap().clone());
        assert_eq!(session.model().id, "claude-instant");
        assert_eq!(session.conversation.len(), 1);
    }

    #[tokio::test]
    async fn send_without_credential_fails_before_the_network() {
        let mut session = test_session(None);
        session.conversation.append(Message::user("hello"));

        let err = session.send().await.unwrap_err();
        assert!(matches!(err, ApiError::MissingCredential));
        // The failed attempt leaves the log unchanged.
        assert_eq!(session.conversation.len(), 1);
        assert!(session.conversation.last().unwrap().is_user());
    }
}
