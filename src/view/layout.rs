//! Screen layout rendering.
//!
//! Pure layout logic. Top to bottom: header, search input, optional error
//! banner, results, optional page bar, status bar. The suggestion dropdown
//! floats over the results directly under the input and is drawn last.

use super::constants::{
    ERROR_BANNER_HEIGHT, HEADER_HEIGHT, PAGINATION_BAR_HEIGHT, SEARCH_INPUT_HEIGHT,
    STATUS_BAR_HEIGHT,
};
use super::pagination::render_page_bar;
use super::results::{render_empty, render_loading, render_results, render_welcome};
use super::search_input::SearchInput;
use super::styles::Palette;
use super::suggestions::{dropdown_area, dropdown_content, render_dropdown, DropdownContent};
use super::{help, sanitize::sanitize};
use crate::state::{AppState, AutocompleteState, SearchPhase};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Regions of the last drawn frame, kept for mouse hit-testing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenAreas {
    /// Header line.
    pub header: Rect,
    /// Search input including its border.
    pub input: Rect,
    /// Error banner, when a search failed.
    pub banner: Option<Rect>,
    /// Results body.
    pub results: Rect,
    /// Page bar, when there is more than one page.
    pub pagination: Option<Rect>,
    /// Status bar.
    pub status: Rect,
    /// Suggestion dropdown and its content, when visible.
    pub dropdown: Option<(Rect, DropdownContent)>,
}

/// Split `screen` for the current state.
pub fn calculate_areas(screen: Rect, state: &AppState, palette: &Palette) -> ScreenAreas {
    let banner_height = match state.session().phase() {
        SearchPhase::Failed { .. } => ERROR_BANNER_HEIGHT,
        _ => 0,
    };
    let pagination_height = match state.session().pagination() {
        Some(pagination) if pagination.is_visible() => PAGINATION_BAR_HEIGHT,
        _ => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(pagination_height),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(screen);

    let dropdown = match state.autocomplete().state() {
        AutocompleteState::Displaying {
            query,
            suggestions,
            cursor,
        } => {
            let content = dropdown_content(suggestions, query, *cursor, palette);
            Some((dropdown_area(chunks[1], &content, screen), content))
        }
        _ => None,
    };

    ScreenAreas {
        header: chunks[0],
        input: chunks[1],
        banner: (banner_height > 0).then_some(chunks[2]),
        results: chunks[3],
        pagination: (pagination_height > 0).then_some(chunks[4]),
        status: chunks[5],
        dropdown,
    }
}

/// Render the whole screen and return the areas used.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: &Palette) -> ScreenAreas {
    let screen = frame.area();
    frame.render_widget(Block::default().style(palette.text), screen);

    let areas = calculate_areas(screen, state, palette);

    render_header(frame, areas.header, state, palette);
    frame.render_widget(
        SearchInput::new(state.input(), palette).loading(state.session().is_loading()),
        areas.input,
    );

    if let (Some(area), SearchPhase::Failed { message }) = (areas.banner, state.session().phase())
    {
        render_error_banner(frame, area, message, palette);
    }

    render_body(frame, areas.results, state, palette);

    if let (Some(area), Some(pagination)) = (areas.pagination, state.session().pagination()) {
        render_page_bar(frame, area, &pagination.controls(), palette);
    }

    render_status_bar(frame, areas.status, state, palette);

    if let Some((area, content)) = &areas.dropdown {
        render_dropdown(frame, *area, content, palette);
    }

    if state.help_visible() {
        help::render_help_overlay(frame, palette);
    }

    areas
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    match state.session().phase() {
        SearchPhase::Idle | SearchPhase::Failed { .. } => render_welcome(frame, area, palette),
        SearchPhase::Loading { .. } => render_loading(frame, area, palette),
        SearchPhase::Empty { .. } => render_empty(frame, area, palette),
        SearchPhase::Loaded { results, .. } => render_results(
            frame,
            area,
            results,
            state.session().current_page_items(),
            state.results_scroll(),
            palette,
        ),
    }
}

fn render_error_banner(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let paragraph = Paragraph::new(Line::from(sanitize(message).into_owned()))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .title_bottom(" Esc to dismiss ")
                .style(palette.error),
        );
    frame.render_widget(paragraph, area);
}

/// Header text: app name and active theme.
fn header_text(state: &AppState) -> String {
    format!(" sift | {} theme", state.theme().as_str())
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let paragraph = Paragraph::new(Line::from(header_text(state))).style(palette.accent);
    frame.render_widget(paragraph, area);
}

/// Status bar text: page position when paginated, then key hints.
fn status_text(state: &AppState) -> String {
    let hints = "Enter: search | ↑↓: suggestions | F1: help | Ctrl+c: quit";
    match state.session().pagination() {
        Some(pagination) if pagination.is_visible() => format!(
            " Page {} of {} | PgUp/PgDn: pages | {}",
            pagination.current_page(),
            pagination.total_pages(),
            hints
        ),
        _ => format!(" {}", hints),
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let paragraph = Paragraph::new(Line::from(Span::styled(status_text(state), palette.muted)));
    frame.render_widget(paragraph, area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
