//! Result list, empty state and loading indicator.

use super::constants::RESULT_CARD_HEIGHT;
use super::sanitize::sanitize;
use super::styles::Palette;
use crate::model::{ResultSet, SearchResult};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Empty-state headline.
pub const NO_RESULTS_TITLE: &str = "No results found";

/// Empty-state hint.
pub const NO_RESULTS_HINT: &str = "Try different keywords or check your spelling";

/// Loading indicator text.
pub const LOADING_TEXT: &str = "Searching...";

/// Summary line above the cards: `<total> results for "<query>"`.
pub fn summary_line(results: &ResultSet) -> String {
    format!(
        "{} results for \"{}\"",
        results.total(),
        sanitize(results.query())
    )
}

/// The lines of one result card.
pub fn card_lines(result: &SearchResult, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(sanitize(&result.title).into_owned(), palette.accent)),
        Line::from(Span::styled(sanitize(&result.authors).into_owned(), palette.muted)),
    ];

    lines.push(match result.summary() {
        Some(summary) => Line::from(Span::styled(sanitize(summary).into_owned(), palette.text)),
        None => Line::default(),
    });

    lines.push(Line::from(vec![
        Span::styled(result.score_label(), palette.muted),
        Span::raw("  "),
        Span::styled(sanitize(&result.id).into_owned(), palette.muted),
        Span::raw("  "),
        Span::styled(sanitize(&result.url).into_owned(), palette.border),
    ]));
    lines.push(Line::default());
    lines
}

/// Render the current page of results starting at card `scroll`.
pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    results: &ResultSet,
    page: &[SearchResult],
    scroll: usize,
    palette: &Palette,
) {
    if area.height == 0 {
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(summary_line(results), palette.muted)),
        Line::default(),
    ];

    let budget = usize::from(area.height.saturating_sub(2) / RESULT_CARD_HEIGHT).max(1);
    for result in page.iter().skip(scroll).take(budget) {
        lines.extend(card_lines(result, palette));
    }

    // Abstracts are truncated to the card's single line rather than wrapped.
    frame.render_widget(Paragraph::new(lines).style(palette.text), area);
}

/// Render the zero-results message.
pub fn render_empty(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(NO_RESULTS_TITLE, palette.accent)),
        Line::from(Span::styled(NO_RESULTS_HINT, palette.muted)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(palette.text),
        area,
    );
}

/// Render the loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(LOADING_TEXT, palette.muted)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(palette.text),
        area,
    );
}

/// Render the prompt shown before the first search.
pub fn render_welcome(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Type a query and press Enter to search",
            palette.muted,
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(palette.text),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchResponse;
    use crate::store::ThemePreference;
    use crate::view::styles::ColorConfig;

    fn result() -> SearchResult {
        SearchResult {
            id: "PMC7".to_string(),
            title: "Spike\nprotein".to_string(),
            authors: "Doe J, Roe R".to_string(),
            summary: Some(String::new()),
            url: "https://example.org/7".to_string(),
            score: 12.3456,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn summary_reports_server_total() {
        let results = ResultSet::from_response(SearchResponse {
            results: vec![result()],
            total: 50,
            query: "spike".to_string(),
        })
        .unwrap();

        assert_eq!(summary_line(&results), "50 results for \"spike\"");
    }

    #[test]
    fn card_omits_empty_abstract_and_shows_score_id_and_url() {
        let palette = Palette::new(ThemePreference::Light, ColorConfig::new(false));

        let lines = card_lines(&result(), &palette);

        assert_eq!(lines.len(), RESULT_CARD_HEIGHT as usize);
        assert_eq!(text(&lines[0]), "Spike protein");
        assert_eq!(text(&lines[2]), "");
        assert_eq!(text(&lines[3]), "Score: 12.35  PMC7  https://example.org/7");
    }
}
