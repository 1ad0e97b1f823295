//! Chat endpoint wire types and errors.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while talking to the chat endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The endpoint returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// POST body sent to the chat endpoint.
///
/// `asociadoNumber` is only present when the widget collects lead data; an
/// empty member number is still sent as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(rename = "asociadoNumber", skip_serializing_if = "Option::is_none")]
    pub member_number: Option<String>,
}

/// Successful response body. `response` may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default, deserialize_with = "lenient_string")]
    pub response: Option<String>,
}

impl ChatReply {
    /// The reply text, treating an empty string as absent.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.response.as_deref().filter(|text| !text.is_empty())
    }
}

/// Accept any JSON value for `response`, keeping it only when it is a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => Some(text),
        _ => None,
    })
}

/// Parse a response body. Pure so it can be tested without HTTP.
///
/// # Errors
///
/// Returns [`ChatError::ApiParse`] when the body is not a JSON object.
pub fn parse_reply(body: &str) -> Result<ChatReply, ChatError> {
    serde_json::from_str(body).map_err(|e| ChatError::ApiParse(e.to_string()))
}

// =============================================================================
// CHAT BACKEND TRAIT
// =============================================================================

/// Transport seam for the request dispatcher. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one question and return the parsed reply.
    ///
    /// # Errors
    ///
    /// Returns a [`ChatError`] on transport failure, non-2xx status, or a
    /// malformed body.
    async fn ask(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
