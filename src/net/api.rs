//! HTTP transport for the chat endpoint.
//!
//! Thin reqwest wrapper: one POST per question, JSON in and out. Parsing
//! lives in [`super::types::parse_reply`] so it can be tested without a
//! server.

use std::time::Duration;

use super::types::{ChatBackend, ChatError, ChatReply, ChatRequest, parse_reply};
use crate::config::Timeouts;

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpChatBackend {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpChatBackend {
    /// Build a client bound to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::HttpClientBuild`] if reqwest cannot build a client.
    pub fn new(endpoint: impl Into<String>, timeouts: Timeouts) -> Result<Self, ChatError> {
        let mut builder = reqwest::Client::builder().connect_timeout(Duration::from_secs(timeouts.connect_secs));
        if let Some(secs) = timeouts.request_secs.filter(|secs| *secs > 0) {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ChatError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: endpoint.into() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpChatBackend {
    async fn ask(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ChatError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ChatError::ApiRequest(e.to_string()))?;

        if !status.is_success() {
            return Err(ChatError::ApiResponse { status: status.as_u16(), body: text });
        }

        parse_reply(&text)
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
