//! Page bar rendering and click hit-testing.

use super::styles::Palette;
use crate::state::PageControl;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// A page bar element with its horizontal extent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSegment {
    /// Control behind this segment.
    pub control: PageControl,
    /// Rendered text.
    pub label: String,
    /// Column offset from the bar's left edge.
    pub start: u16,
    /// Display width.
    pub width: u16,
}

fn label(control: &PageControl) -> String {
    match control {
        PageControl::Previous { .. } => "« Prev".to_string(),
        PageControl::Next { .. } => "Next »".to_string(),
        PageControl::Page { number, active: true } => format!("[{}]", number),
        PageControl::Page { number, .. } => format!(" {} ", number),
        PageControl::Ellipsis => "…".to_string(),
    }
}

/// Lay controls out left to right, one space apart.
pub fn page_segments(controls: &[PageControl]) -> Vec<PageSegment> {
    let mut segments = Vec::with_capacity(controls.len());
    let mut start: u16 = 0;

    for control in controls {
        let label = label(control);
        let width = u16::try_from(label.width()).unwrap_or(u16::MAX);
        segments.push(PageSegment {
            control: *control,
            label,
            start,
            width,
        });
        start = start.saturating_add(width).saturating_add(1);
    }

    segments
}

/// Plain-text rendering of the page bar.
pub fn page_bar_text(controls: &[PageControl]) -> String {
    page_segments(controls)
        .into_iter()
        .map(|segment| segment.label)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the page bar.
pub fn render_page_bar(frame: &mut Frame, area: Rect, controls: &[PageControl], palette: &Palette) {
    let mut spans = Vec::new();
    for (i, segment) in page_segments(controls).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = match segment.control {
            PageControl::Previous { enabled: false } | PageControl::Next { enabled: false } => {
                palette.disabled
            }
            PageControl::Page { active: true, .. } => palette.active_page,
            PageControl::Ellipsis => palette.muted,
            _ => palette.accent,
        };
        spans.push(Span::styled(segment.label, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(palette.text), area);
}

/// Control under a click at terminal column `column`, if any.
pub fn control_at_column(area: Rect, controls: &[PageControl], column: u16) -> Option<PageControl> {
    let offset = column.checked_sub(area.x)?;
    page_segments(controls)
        .into_iter()
        .find(|segment| offset >= segment.start && offset < segment.start + segment.width)
        .map(|segment| segment.control)
}
