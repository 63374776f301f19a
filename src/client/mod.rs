//! Remote search service access.
//!
//! [`SearchBackend`] is the seam between the state core and the network.
//! [`HttpBackend`] talks to the real service; tests substitute their own
//! implementations. The [`Dispatcher`] runs backend calls off the UI thread.

pub mod dispatcher;
pub mod http;

pub use dispatcher::{DispatchMode, Dispatcher};
pub use http::HttpBackend;

use crate::model::{ClientError, SearchResponse};

/// Blocking access to the search service's two endpoints.
///
/// Implementations are called from worker threads, hence `Send + Sync`.
pub trait SearchBackend: Send + Sync {
    /// Fetch lexicon completions for a non-empty, trimmed prefix.
    ///
    /// The list may be longer than what is displayed; callers cap it.
    fn autocomplete(&self, query: &str) -> Result<Vec<String>, ClientError>;

    /// Run a full search for the query exactly as submitted.
    fn search(&self, query: &str) -> Result<SearchResponse, ClientError>;
}
