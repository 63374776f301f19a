//! Configuration module.
//!
//! Resolution order: defaults → config file → environment → CLI flags.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_file, load_config_with_precedence,
    merge_config, ConfigError, ConfigFile, ResolvedConfig,
};

use std::time::Duration;

impl ResolvedConfig {
    /// Debounce delay as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// HTTP request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
