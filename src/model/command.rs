//! Side-effect requests emitted by the pure state core, and their results.
//!
//! State transitions never touch the network. They return [`Command`]s that
//! the shell hands to the dispatcher, and receive [`Completion`]s back.

use crate::model::error::ClientError;
use crate::model::search_result::SearchResponse;

/// A remote request the shell must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up lexicon suggestions for a trimmed prefix.
    FetchSuggestions {
        /// Autocomplete generation that armed the request.
        generation: u64,
        /// Trimmed input text at the time the timer fired.
        query: String,
    },
    /// Execute a full search.
    RunSearch {
        /// Search generation stamped at submit time.
        generation: u64,
        /// The query exactly as submitted.
        query: String,
    },
}

impl Command {
    /// Generation stamp carried by the command.
    pub fn generation(&self) -> u64 {
        match self {
            Command::FetchSuggestions { generation, .. } | Command::RunSearch { generation, .. } => {
                *generation
            }
        }
    }

    /// Query text carried by the command.
    pub fn query(&self) -> &str {
        match self {
            Command::FetchSuggestions { query, .. } | Command::RunSearch { query, .. } => query,
        }
    }
}

/// Outcome of a [`Command`], tagged with the same generation and query.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Result of [`Command::FetchSuggestions`].
    Suggestions {
        /// Generation copied from the command.
        generation: u64,
        /// Query copied from the command.
        query: String,
        /// Lexicon strings or the failure.
        result: Result<Vec<String>, ClientError>,
    },
    /// Result of [`Command::RunSearch`].
    Search {
        /// Generation copied from the command.
        generation: u64,
        /// Query copied from the command.
        query: String,
        /// Search response or the failure.
        result: Result<SearchResponse, ClientError>,
    },
}
