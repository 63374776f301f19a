//! Persisted light/dark theme preference.

use super::KeyValueStore;
use tracing::warn;

/// Storage key of the theme flag.
pub const THEME_KEY: &str = "theme";

/// Color scheme chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl ThemePreference {
    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Read the stored preference. Anything other than `"dark"` is light.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(THEME_KEY) {
            Ok(Some(value)) if value == "dark" => ThemePreference::Dark,
            Ok(_) => ThemePreference::Light,
            Err(err) => {
                warn!(error = %err, "Could not read theme preference");
                ThemePreference::Light
            }
        }
    }

    /// Persist the preference. Failures are logged and ignored.
    pub fn save(self, store: &mut dyn KeyValueStore) {
        if let Err(err) = store.set(THEME_KEY, self.as_str()) {
            warn!(error = %err, "Could not persist theme preference");
        }
    }
}
