//! Search results as returned by the remote search service.
//!
//! These types double as the wire format of the search endpoint. Unknown
//! fields sent by the server (for example `doc_name`) are ignored.

use serde::{Deserialize, Serialize};

/// A single matching document.
///
/// Immutable once received. Owned by the search session for the lifetime
/// of one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Document identifier (e.g. `PMC12345`).
    pub id: String,
    /// Document title.
    pub title: String,
    /// Pre-formatted author list.
    #[serde(default)]
    pub authors: String,
    /// Abstract or leading body text. Empty strings are treated as absent.
    #[serde(default, rename = "abstract")]
    pub summary: Option<String>,
    /// Link to the full document.
    #[serde(default)]
    pub url: String,
    /// Relevance score reported by the server.
    #[serde(default)]
    pub score: f64,
}

impl SearchResult {
    /// Abstract text, if the server sent a non-empty one.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Score formatted the way the result card shows it (two decimals).
    pub fn score_label(&self) -> String {
        format!("Score: {:.2}", self.score)
    }
}

/// Body of a successful response from the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ordered result list.
    #[serde(default)]
    pub results: Vec<SearchResult>,
    /// Result count reported by the server.
    #[serde(default)]
    pub total: usize,
    /// Query as echoed by the server.
    #[serde(default)]
    pub query: String,
}

/// Request body sent to the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest<'a> {
    /// The exact query text the user submitted.
    pub query: &'a str,
}

/// Body of a successful response from the autocomplete endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AutocompleteResponse {
    /// Lexicon suggestions. Absent or null means none.
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
}

impl AutocompleteResponse {
    /// Consume the response, treating a missing list as empty.
    pub fn into_suggestions(self) -> Vec<String> {
        self.suggestions.unwrap_or_default()
    }
}

/// Optional error body sent with non-success responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error text, shown verbatim to the user.
    #[serde(default)]
    pub error: Option<String>,
}

// ===== ResultSet =====

/// The result set of one successful, non-empty search.
///
/// `items.len()` may be smaller than `total`: the server reports a count
/// that can exceed what it actually sends. Pagination works on `items`,
/// the summary line shows `total`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    query: String,
    total: usize,
    items: Vec<SearchResult>,
}

impl ResultSet {
    /// Build a result set from a search response.
    ///
    /// Returns `None` when the response carries no results; an empty search
    /// is presented differently and never retained.
    pub fn from_response(response: SearchResponse) -> Option<Self> {
        if response.results.is_empty() {
            return None;
        }
        Some(Self {
            query: response.query,
            total: response.total,
            items: response.results,
        })
    }

    /// Query echoed by the server.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Server-reported result count.
    pub fn total(&self) -> usize {
        self.total
    }

    /// All received results in server order.
    pub fn items(&self) -> &[SearchResult] {
        &self.items
    }
}
