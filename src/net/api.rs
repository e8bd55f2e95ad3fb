//! HTTP calls to the chat and lead-storage endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: `HttpApi` returns `ApiError::Unavailable` since these
//! endpoints are only reachable from the browser. Orchestration code talks
//! to the `WidgetApi` trait so tests can script both endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. The chat endpoint's HTTP
//! status is deliberately not checked: its error bodies (e.g. rate limiting)
//! carry a displayable `response` and are rendered like any reply.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::ChatReply;
use crate::lead::LeadRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("endpoint responded with status {0}")]
    Status(u16),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Outbound calls made by the widget.
#[async_trait(?Send)]
pub trait WidgetApi {
    /// `POST {chat_endpoint}` with `{ "message": message }`.
    async fn send_chat(&self, message: &str) -> Result<ChatReply, ApiError>;

    /// `POST {lead_endpoint}` with the record. Only the status is checked.
    async fn save_lead(&self, record: &LeadRecord) -> Result<(), ApiError>;
}

/// `WidgetApi` backed by `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    chat_endpoint: String,
    lead_endpoint: String,
}

impl HttpApi {
    #[must_use]
    pub fn new(chat_endpoint: impl Into<String>, lead_endpoint: impl Into<String>) -> Self {
        Self { chat_endpoint: chat_endpoint.into(), lead_endpoint: lead_endpoint.into() }
    }

    #[must_use]
    pub fn from_config(config: &crate::config::WidgetConfig) -> Self {
        Self::new(config.chat_endpoint.clone(), config.lead_endpoint.clone())
    }
}

#[async_trait(?Send)]
impl WidgetApi for HttpApi {
    async fn send_chat(&self, message: &str) -> Result<ChatReply, ApiError> {
        #[cfg(feature = "csr")]
        {
            let payload = super::types::ChatRequest { message };
            let resp = gloo_net::http::Request::post(&self.chat_endpoint)
                .json(&payload)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            resp.json::<ChatReply>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.chat_endpoint, message);
            Err(ApiError::Unavailable)
        }
    }

    async fn save_lead(&self, record: &LeadRecord) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.lead_endpoint)
                .json(record)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.lead_endpoint, record);
            Err(ApiError::Unavailable)
        }
    }
}
