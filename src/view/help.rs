//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by F1, dismissed by Esc or F1.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Search",
        &[
            ("Enter", "Run search / use highlighted suggestion"),
            ("Esc", "Close suggestions or error message"),
            ("Ctrl+u", "Clear the input"),
        ],
    ),
    (
        "Suggestions",
        &[
            ("↓", "Highlight next suggestion"),
            ("↑", "Highlight previous suggestion"),
            ("Click", "Search for the clicked suggestion"),
        ],
    ),
    (
        "Editing",
        &[
            ("←/→", "Move cursor"),
            ("Home/Ctrl+a", "Start of input"),
            ("End/Ctrl+e", "End of input"),
        ],
    ),
    (
        "Results",
        &[
            ("PgDn/Ctrl+n", "Next page"),
            ("PgUp/Ctrl+p", "Previous page"),
            ("↓/↑/Wheel", "Scroll results"),
        ],
    ),
    (
        "Application",
        &[
            ("Ctrl+t", "Toggle light/dark theme"),
            ("F1", "Show this help"),
            ("Ctrl+c", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.border)
                .style(palette.text),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or F1 to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let key_style = palette.accent;
    let mut lines = Vec::new();

    for (i, (category, shortcuts)) in SHORTCUTS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            *category,
            palette.muted.add_modifier(Modifier::BOLD),
        )));
        for (key, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", key), key_style),
                Span::styled(*description, palette.text),
            ]));
        }
    }

    lines
}
