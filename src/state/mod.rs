//! Console state machine (pure).
//!
//! No module here touches the terminal or the network. Time is passed in as
//! `Instant`s and requests leave as `Command`s, so every transition is
//! testable without a TUI.

pub mod action_handler;
pub mod app_state;
pub mod autocomplete;
pub mod debounce;
pub mod input;
pub mod pagination;
pub mod session;

// Re-export for convenience
pub use action_handler::{handle_action, handle_char};
pub use app_state::AppState;
pub use autocomplete::{AutocompleteEngine, AutocompleteState};
pub use debounce::DebounceTimer;
pub use input::InputLine;
pub use pagination::{page_controls, total_pages, PageControl, Pagination, PAGE_SIZE};
pub use session::{failure_message, SearchPhase, SearchSession};
