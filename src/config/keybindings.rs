//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Only control keys are bound: every printable character typed without a
/// modifier edits the search input, so letters cannot carry shortcuts.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Key event kind and state are ignored so press/repeat events from
    /// terminals with keyboard enhancement resolve the same way.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Bind `code` + `modifiers` to `action`, replacing any previous binding.
    pub fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings
            .insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        // Input editing
        bindings.bind(KeyCode::Backspace, KeyModifiers::NONE, KeyAction::DeleteBackward);
        bindings.bind(KeyCode::Delete, KeyModifiers::NONE, KeyAction::DeleteForward);
        bindings.bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::CursorLeft);
        bindings.bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::CursorRight);
        bindings.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::CursorHome);
        bindings.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::CursorEnd);
        bindings.bind(KeyCode::Char('a'), KeyModifiers::CONTROL, KeyAction::CursorHome);
        bindings.bind(KeyCode::Char('e'), KeyModifiers::CONTROL, KeyAction::CursorEnd);
        bindings.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::ClearInput);

        // Suggestions / results
        bindings.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::SelectNext);
        bindings.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::SelectPrev);
        bindings.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Submit);
        bindings.bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Dismiss);

        // Pagination
        bindings.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::NextPage);
        bindings.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PrevPage);
        bindings.bind(KeyCode::Char('n'), KeyModifiers::CONTROL, KeyAction::NextPage);
        bindings.bind(KeyCode::Char('p'), KeyModifiers::CONTROL, KeyAction::PrevPage);

        // Application controls
        bindings.bind(KeyCode::Char('t'), KeyModifiers::CONTROL, KeyAction::ToggleTheme);
        bindings.bind(KeyCode::F(1), KeyModifiers::NONE, KeyAction::Help);
        bindings.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        bindings
    }
}
