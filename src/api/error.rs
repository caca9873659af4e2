//! Error types for the chat-completions adapter.

use std::fmt;

/// Failures that can occur on a single chat-completions call.
///
/// Every variant is terminal for that call: nothing is retried, the caller
/// reports the failure and leaves the conversation log as it was.
#[derive(Debug)]
pub enum ApiError {
    /// No bearer token was available; the request is never issued.
    MissingCredential,
    /// The HTTP transport failed before a usable response arrived.
    Network(reqwest::Error),
    /// The gateway answered with a non-success status.
    Api { status: u16, body: String },
    /// The response body was not the expected JSON shape.
    MalformedResponse(serde_json::Error),
    /// The response parsed but carried no usable completion.
    EmptyChoices,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingCredential => {
                write!(f, "no API key configured")
            }
            ApiError::Network(e) => write!(f, "request failed: {e}"),
            ApiError::Api { status, body } => {
                write!(f, "API error (status {status}): {body}")
            }
            ApiError::MalformedResponse(e) => {
                write!(f, "could not parse API response: {e}")
            }
            ApiError::EmptyChoices => {
                write!(f, "the response contained no completion choices")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e) => Some(e),
            ApiError::MalformedResponse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedResponse(err)
    }
}
