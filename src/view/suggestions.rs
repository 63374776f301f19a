//! Autocomplete dropdown rendered under the search input.
//!
//! History rows come first under "Recent searches" with a clock marker,
//! lexicon rows follow under "Suggestions". The part of each row matching
//! the typed query is bold.

use super::sanitize::sanitize;
use super::styles::Palette;
use crate::model::{split_highlight, SuggestionSet};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Section label above history rows.
pub const HISTORY_LABEL: &str = "Recent searches";

/// Section label above lexicon rows.
pub const LEXICON_LABEL: &str = "Suggestions";

const HISTORY_MARKER: &str = "◷ ";
const LEXICON_MARKER: &str = "  ";

/// Rendered dropdown content and the item index behind each line.
///
/// `rows[i]` is `Some(item)` when line `i` is a suggestion, `None` for a
/// section label.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownContent {
    /// Lines inside the border.
    pub lines: Vec<Line<'static>>,
    /// Item index per line.
    pub rows: Vec<Option<usize>>,
}

impl DropdownContent {
    /// Height including the border.
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }
}

/// Build the dropdown lines for `suggestions`.
pub fn dropdown_content(
    suggestions: &SuggestionSet,
    query: &str,
    cursor: Option<usize>,
    palette: &Palette,
) -> DropdownContent {
    let mut lines = Vec::new();
    let mut rows = Vec::new();

    let sections = [
        (HISTORY_LABEL, HISTORY_MARKER, suggestions.history(), 0),
        (
            LEXICON_LABEL,
            LEXICON_MARKER,
            suggestions.lexicon(),
            suggestions.history().len(),
        ),
    ];

    for (label, marker, texts, offset) in sections {
        if texts.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(label, palette.muted)));
        rows.push(None);

        for (i, text) in texts.iter().enumerate() {
            let index = offset + i;
            let base = if cursor == Some(index) {
                palette.selected
            } else {
                palette.text
            };
            lines.push(suggestion_line(text, query, marker, base, palette));
            rows.push(Some(index));
        }
    }

    DropdownContent { lines, rows }
}

fn suggestion_line(
    text: &str,
    query: &str,
    marker: &'static str,
    base: ratatui::style::Style,
    palette: &Palette,
) -> Line<'static> {
    let clean = sanitize(text);
    let (before, matched, after) = split_highlight(&clean, query);

    Line::from(vec![
        Span::styled(marker, base),
        Span::styled(before.to_string(), base),
        Span::styled(matched.to_string(), base.patch(palette.matched)),
        Span::styled(after.to_string(), base),
    ])
    .style(base)
}

/// Area of the dropdown directly below `input`, clipped to `screen`.
pub fn dropdown_area(input: Rect, content: &DropdownContent, screen: Rect) -> Rect {
    let y = input.y + input.height;
    let available = screen.bottom().saturating_sub(y);
    Rect {
        x: input.x,
        y,
        width: input.width,
        height: content.height().min(available),
    }
}

/// Draw the dropdown over whatever is below the input.
pub fn render_dropdown(frame: &mut Frame, area: Rect, content: &DropdownContent, palette: &Palette) {
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(content.lines.clone()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border)
            .style(palette.text),
    );
    frame.render_widget(paragraph, area);
}

/// Item under a click at terminal row `row`, if any.
pub fn item_at_row(area: Rect, content: &DropdownContent, row: u16) -> Option<usize> {
    // Skip the top border.
    let line = row.checked_sub(area.y + 1)?;
    if line + 1 >= area.height {
        return None;
    }
    content.rows.get(usize::from(line)).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ThemePreference;
    use crate::view::styles::ColorConfig;
    use ratatui::style::Modifier;

    fn palette() -> Palette {
        Palette::new(ThemePreference::Light, ColorConfig::new(true))
    }

    fn set() -> SuggestionSet {
        SuggestionSet::new(
            vec!["Covid vaccine".to_string()],
            vec!["covid".to_string(), "coverage".to_string()],
        )
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn sections_are_labelled_history_first() {
        let content = dropdown_content(&set(), "cov", None, &palette());

        let texts: Vec<String> = content.lines.iter().map(line_text).collect();
        assert_eq!(
            texts,
            vec![
                "Recent searches",
                "◷ Covid vaccine",
                "Suggestions",
                "  covid",
                "  coverage",
            ]
        );
        assert_eq!(content.rows, vec![None, Some(0), None, Some(1), Some(2)]);
        assert_eq!(content.height(), 7);
    }

    #[test]
    fn empty_history_omits_its_label() {
        let set = SuggestionSet::new(vec![], vec!["covid".to_string()]);
        let content = dropdown_content(&set, "cov", None, &palette());

        assert_eq!(line_text(&content.lines[0]), LEXICON_LABEL);
        assert_eq!(content.rows, vec![None, Some(0)]);
    }

    #[test]
    fn matched_part_is_bold() {
        let content = dropdown_content(&set(), "VAC", None, &palette());

        let spans = &content.lines[1].spans;
        assert_eq!(spans[2].content, "vac");
        assert!(spans[2].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn highlighted_row_uses_selected_style() {
        let palette = palette();
        let content = dropdown_content(&set(), "cov", Some(1), &palette);

        assert_eq!(content.lines[3].style, palette.selected);
        assert_eq!(content.lines[4].style, palette.text);
    }

    #[test]
    fn click_rows_map_to_items() {
        let content = dropdown_content(&set(), "cov", None, &palette());
        let area = Rect::new(0, 4, 40, content.height());

        assert_eq!(item_at_row(area, &content, 4), None, "top border");
        assert_eq!(item_at_row(area, &content, 5), None, "label");
        assert_eq!(item_at_row(area, &content, 6), Some(0));
        assert_eq!(item_at_row(area, &content, 9), Some(2));
        assert_eq!(item_at_row(area, &content, 10), None, "bottom border");
    }

    #[test]
    fn dropdown_is_clipped_to_screen() {
        let content = dropdown_content(&set(), "cov", None, &palette());
        let area = dropdown_area(Rect::new(0, 1, 40, 3), &content, Rect::new(0, 0, 40, 8));

        assert_eq!(area.y, 4);
        assert_eq!(area.height, 4);
    }
}
