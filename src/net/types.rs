//! Wire types for the chat endpoint.
//!
//! The lead-storage payload lives in `crate::lead::LeadRecord`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST {chat_endpoint}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Body returned by the chat endpoint.
///
/// The reply text arrives under `response` or, from older backends, `reply`.
/// `history` is an opaque transcript forwarded verbatim to lead storage.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatReply {
    pub response: Option<String>,
    pub reply: Option<String>,
    pub history: Option<serde_json::Value>,
}

impl ChatReply {
    /// Reply text, preferring `response`. Empty strings count as missing.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.response
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.reply.as_deref().filter(|s| !s.is_empty()))
    }

    /// Reply text or `fallback` when the backend sent none.
    #[must_use]
    pub fn text_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.text().unwrap_or(fallback)
    }
}
