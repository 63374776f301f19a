//! sift
//!
//! Terminal search console for a remote document search service, with
//! history-aware autocomplete and paginated results.
//!
//! Pure Core / Impure Shell: `model`, `state` and `store` hold no terminal
//! or network code; `client` and `view` are the shell around them.

pub mod client;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod store;
pub mod view;
