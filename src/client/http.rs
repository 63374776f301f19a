//! HTTP implementation of [`SearchBackend`].
//!
//! Response handling is split from transport: `decode_*` take a status code
//! and body text, so every server behavior can be tested without a socket.

use super::SearchBackend;
use crate::model::{
    AutocompleteResponse, ClientError, ErrorBody, SearchRequest, SearchResponse,
};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP client bound to one service base URL.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client for `base_url` (no trailing slash) with a total
    /// per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the TLS backend cannot be
    /// initialized.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Service base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl SearchBackend for HttpBackend {
    fn autocomplete(&self, query: &str) -> Result<Vec<String>, ClientError> {
        let response = self
            .client
            .get(self.endpoint("/api/autocomplete"))
            .query(&[("query", query)])
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(query, status, "autocomplete response");

        decode_autocomplete(status, &body)
    }

    fn search(&self, query: &str) -> Result<SearchResponse, ClientError> {
        let response = self
            .client
            .post(self.endpoint("/api/search"))
            .json(&SearchRequest { query })
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(query, status, bytes = body.len(), "search response");

        decode_search(status, &body)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Extract the `{error}` text from a failure body, if it is one.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.is_empty())
}

/// Interpret an autocomplete response.
///
/// A missing or null `suggestions` field is an empty list.
///
/// # Errors
///
/// Non-2xx status becomes [`ClientError::Status`]; an unparseable success
/// body becomes [`ClientError::Decode`].
pub fn decode_autocomplete(status: u16, body: &str) -> Result<Vec<String>, ClientError> {
    if !is_success(status) {
        return Err(ClientError::Status {
            status,
            message: error_message(body),
        });
    }

    serde_json::from_str::<AutocompleteResponse>(body)
        .map(AutocompleteResponse::into_suggestions)
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// Interpret a search response.
///
/// # Errors
///
/// Non-2xx status becomes [`ClientError::Status`] carrying the server's
/// `error` text when the body has one; an unparseable success body becomes
/// [`ClientError::Decode`].
pub fn decode_search(status: u16, body: &str) -> Result<SearchResponse, ClientError> {
    if !is_success(status) {
        return Err(ClientError::Status {
            status,
            message: error_message(body),
        });
    }

    serde_json::from_str::<SearchResponse>(body).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
