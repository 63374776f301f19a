//! Search input widget for rendering the query line.

use super::styles::Palette;
use crate::state::InputLine;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown while the input is empty.
pub const PLACEHOLDER: &str = "Search documents...";

/// Search input widget.
/// Renders the editable query with a block cursor.
pub struct SearchInput<'a> {
    input: &'a InputLine,
    palette: &'a Palette,
    loading: bool,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(input: &'a InputLine, palette: &'a Palette) -> Self {
        Self {
            input,
            palette,
            loading: false,
        }
    }

    /// Mark a search as in flight; the title changes to say so.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn line(&self) -> Line<'static> {
        let text = self.input.text();
        let cursor = self.input.cursor();

        let before: String = text.chars().take(cursor).collect();
        let mut after = text.chars().skip(cursor);
        let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let rest: String = after.collect();

        let cursor_style = self.palette.selected.add_modifier(Modifier::BOLD);

        if text.is_empty() {
            return Line::from(vec![
                Span::styled(cursor_char, cursor_style),
                Span::styled(PLACEHOLDER, self.palette.muted),
            ]);
        }

        Line::from(vec![
            Span::styled(before, self.palette.text),
            Span::styled(cursor_char, cursor_style),
            Span::styled(rest, self.palette.text),
        ])
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.loading {
            " Search (loading) "
        } else {
            " Search "
        };

        let paragraph = Paragraph::new(self.line()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(self.palette.border)
                .style(self.palette.text),
        );

        paragraph.render(area, buf);
    }
}
