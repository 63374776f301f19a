//! Routes keyboard actions to state transitions.

use crate::model::{Command, KeyAction};
use crate::state::AppState;
use std::time::Instant;

/// Apply a bound action. Returns a command when the action starts a request.
///
/// While the help overlay is open, every action except Quit only closes it.
pub fn handle_action(state: &mut AppState, action: KeyAction, now: Instant) -> Option<Command> {
    if state.help_visible() && action != KeyAction::Quit {
        state.toggle_help();
        return None;
    }

    match action {
        KeyAction::DeleteBackward => state.delete_backward(now),
        KeyAction::DeleteForward => state.delete_forward(now),
        KeyAction::CursorLeft => state.cursor_left(),
        KeyAction::CursorRight => state.cursor_right(),
        KeyAction::CursorHome => state.cursor_home(),
        KeyAction::CursorEnd => state.cursor_end(),
        KeyAction::ClearInput => state.clear_input(now),
        KeyAction::SelectNext => state.select_next(),
        KeyAction::SelectPrev => state.select_prev(),
        KeyAction::Submit => return state.submit(),
        KeyAction::Dismiss => state.dismiss(),
        KeyAction::NextPage => state.next_page(),
        KeyAction::PrevPage => state.prev_page(),
        KeyAction::ToggleTheme => state.toggle_theme(),
        KeyAction::Help => state.toggle_help(),
        KeyAction::Quit => state.request_quit(),
    }
    None
}

/// Apply a typed character. Ignored while the help overlay is open.
pub fn handle_char(state: &mut AppState, ch: char, now: Instant) {
    if state.help_visible() {
        state.toggle_help();
        return;
    }
    if !ch.is_control() {
        state.insert_char(ch, now);
    }
}
