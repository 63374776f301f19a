//! Domain model types (pure).
//!
//! All types in this module are plain data with smart constructors.

pub mod command;
pub mod error;
pub mod key_action;
pub mod search_result;
pub mod suggestion;

// Re-export for convenience
pub use command::{Command, Completion};
pub use error::{AppError, ClientError, StoreError};
pub use key_action::KeyAction;
pub use search_result::{
    AutocompleteResponse, ErrorBody, ResultSet, SearchRequest, SearchResponse, SearchResult,
};
pub use suggestion::{
    match_range, split_highlight, SuggestionItem, SuggestionSet, SuggestionSource,
    HISTORY_SUGGESTION_LIMIT, LEXICON_SUGGESTION_LIMIT,
};
