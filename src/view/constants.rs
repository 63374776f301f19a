//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header line.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the error banner (border + message).
pub const ERROR_BANNER_HEIGHT: u16 = 3;

/// Height of the page bar.
pub const PAGINATION_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Lines used by one result card, including the blank separator.
pub const RESULT_CARD_HEIGHT: u16 = 5;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Event loop wake-up interval while idle, for draining completions.
pub const TICK_INTERVAL_MS: u64 = 50;
