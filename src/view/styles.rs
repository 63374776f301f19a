//! Color palettes for the light and dark themes.

use crate::store::ThemePreference;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Resolved styles for one frame.
///
/// With colors disabled every style drops its colors but keeps modifiers,
/// so bold matches and the reversed selection stay visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Body text.
    pub text: Style,
    /// Secondary text: authors, hints, section labels.
    pub muted: Style,
    /// Titles and the header.
    pub accent: Style,
    /// Borders of the input and dropdown.
    pub border: Style,
    /// Highlighted dropdown row.
    pub selected: Style,
    /// Matched substring inside a suggestion.
    pub matched: Style,
    /// Error banner.
    pub error: Style,
    /// Active page button.
    pub active_page: Style,
    /// Disabled Previous/Next.
    pub disabled: Style,
}

impl Palette {
    /// Palette for `theme`, honoring `colors`.
    pub fn new(theme: ThemePreference, colors: ColorConfig) -> Self {
        let palette = match theme {
            ThemePreference::Light => Self {
                text: Style::default().fg(Color::Black).bg(Color::White),
                muted: Style::default().fg(Color::DarkGray),
                accent: Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                border: Style::default().fg(Color::Blue),
                selected: Style::default().fg(Color::White).bg(Color::Blue),
                matched: Style::default().add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::White).bg(Color::Red),
                active_page: Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                disabled: Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::DIM),
            },
            ThemePreference::Dark => Self {
                text: Style::default().fg(Color::White).bg(Color::Black),
                muted: Style::default().fg(Color::Gray),
                accent: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                border: Style::default().fg(Color::Cyan),
                selected: Style::default().fg(Color::Black).bg(Color::Cyan),
                matched: Style::default().add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::White).bg(Color::Red),
                active_page: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                disabled: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            },
        };

        if colors.colors_enabled() {
            palette
        } else {
            palette.monochrome()
        }
    }

    fn monochrome(self) -> Self {
        let strip = |style: Style| Style {
            fg: None,
            bg: None,
            ..style
        };
        Self {
            text: strip(self.text),
            muted: strip(self.muted),
            accent: strip(self.accent),
            border: strip(self.border),
            selected: strip(self.selected).add_modifier(Modifier::REVERSED),
            matched: strip(self.matched),
            error: strip(self.error).add_modifier(Modifier::BOLD),
            active_page: strip(self.active_page).add_modifier(Modifier::REVERSED),
            disabled: strip(self.disabled),
        }
    }
}

// ===== Tests =====
