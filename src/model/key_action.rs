//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Printable characters that are not bound fall through to text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Input editing
    /// Delete the character before the cursor. Default: Backspace
    DeleteBackward,
    /// Delete the character under the cursor. Default: Delete
    DeleteForward,
    /// Move the input cursor left. Default: ←
    CursorLeft,
    /// Move the input cursor right. Default: →
    CursorRight,
    /// Move the input cursor to the start. Default: Home/Ctrl+a
    CursorHome,
    /// Move the input cursor to the end. Default: End/Ctrl+e
    CursorEnd,
    /// Clear the whole input. Default: Ctrl+u
    ClearInput,

    // Suggestions / results
    /// Highlight the next suggestion, or scroll results down. Default: ↓
    SelectNext,
    /// Highlight the previous suggestion, or scroll results up. Default: ↑
    SelectPrev,
    /// Commit the highlighted suggestion, or submit the input. Default: Enter
    Submit,
    /// Dismiss the dropdown, or the error banner. Default: Esc
    Dismiss,

    // Pagination
    /// Go to the next result page. Default: Page Down
    NextPage,
    /// Go to the previous result page. Default: Page Up
    PrevPage,

    // Application
    /// Toggle between light and dark theme. Default: Ctrl+t
    ToggleTheme,
    /// Show or hide the keyboard shortcut overlay. Default: F1
    Help,
    /// Exit the application. Default: Ctrl+c
    Quit,
}
