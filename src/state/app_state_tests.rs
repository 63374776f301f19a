//! Tests for AppState routing.

use super::*;
use crate::model::{ClientError, SearchResponse, SearchResult};
use crate::state::session::SearchPhase;
use crate::store::{KeyValueStore, MemoryStore, HISTORY_KEY, THEME_KEY};

const DEBOUNCE: Duration = Duration::from_millis(200);

// ===== Test Helpers =====

fn state_with_history(entries: &[&str]) -> AppState {
    let mut backend = MemoryStore::new();
    backend
        .set(HISTORY_KEY, &serde_json::to_string(entries).unwrap())
        .unwrap();
    AppState::new(SuggestionStore::load(Box::new(backend)), DEBOUNCE)
}

fn fresh_state() -> AppState {
    state_with_history(&[])
}

fn type_text(state: &mut AppState, text: &str, now: Instant) {
    for ch in text.chars() {
        state.insert_char(ch, now);
    }
}

/// Type `text`, fire the debounce and feed back `lexicon`.
fn show_suggestions(state: &mut AppState, text: &str, lexicon: &[&str]) {
    let now = Instant::now();
    type_text(state, text, now);
    let command = state.tick(now + DEBOUNCE).expect("fetch command");
    let Command::FetchSuggestions { generation, query } = command else {
        panic!("expected fetch, got {:?}", command);
    };
    assert!(state.apply_completion(Completion::Suggestions {
        generation,
        query,
        result: Ok(lexicon.iter().map(|s| s.to_string()).collect()),
    }));
}

fn results(count: usize) -> SearchResponse {
    SearchResponse {
        results: (0..count)
            .map(|i| SearchResult {
                id: format!("PMC{}", i),
                title: format!("Title {}", i),
                authors: String::new(),
                summary: None,
                url: String::new(),
                score: 0.5,
            })
            .collect(),
        total: count,
        query: "q".to_string(),
    }
}

fn complete_search(state: &mut AppState, command: Command, response: SearchResponse) {
    let Command::RunSearch { generation, query } = command else {
        panic!("expected search, got {:?}", command);
    };
    assert!(state.apply_completion(Completion::Search {
        generation,
        query,
        result: Ok(response),
    }));
}

// ===== Input → autocomplete =====

#[test]
fn typing_schedules_lookup_after_debounce() {
    let mut state = fresh_state();
    let now = Instant::now();

    type_text(&mut state, "cov", now);

    assert_eq!(state.next_deadline(), Some(now + DEBOUNCE));
    assert_eq!(state.tick(now), None);
    assert!(matches!(
        state.tick(now + DEBOUNCE),
        Some(Command::FetchSuggestions { ref query, .. }) if query == "cov"
    ));
}

#[test]
fn cursor_movement_does_not_trigger_lookup() {
    let mut state = fresh_state();
    let now = Instant::now();
    type_text(&mut state, "cov", now);
    state.tick(now + DEBOUNCE);

    state.cursor_left();
    state.cursor_home();

    assert_eq!(state.next_deadline(), None);
}

#[test]
fn arrow_down_copies_highlight_into_input() {
    let mut state = fresh_state();
    show_suggestions(&mut state, "cov", &["covid", "coverage"]);

    state.select_next();
    state.select_next();

    assert_eq!(state.input().text(), "coverage");
    assert_eq!(state.next_deadline(), None, "copying text is not typing");
}

#[test]
fn arrow_up_past_first_row_keeps_copied_text() {
    let mut state = fresh_state();
    show_suggestions(&mut state, "cov", &["covid", "coverage"]);

    state.select_next();
    state.select_prev();

    assert_eq!(state.input().text(), "covid");
    assert_eq!(state.autocomplete().selected(), None);
}

#[test]
fn enter_with_highlight_commits_suggestion() {
    let mut state = fresh_state();
    show_suggestions(&mut state, "cov", &["covid", "coverage"]);
    state.select_next();

    let command = state.submit();

    assert_eq!(
        command.as_ref().map(Command::query),
        Some("covid")
    );
    assert!(!state.autocomplete().is_displaying());
    assert_eq!(state.history().entries(), &["covid"]);
}

#[test]
fn clicking_suggestion_commits_it() {
    let mut state = state_with_history(&["covid vaccine"]);
    show_suggestions(&mut state, "cov", &["covid"]);

    let command = state.commit_suggestion(1);

    assert_eq!(command.as_ref().map(Command::query), Some("covid"));
    assert_eq!(state.input().text(), "covid");
}

#[test]
fn click_outside_hides_dropdown() {
    let mut state = fresh_state();
    show_suggestions(&mut state, "cov", &["covid"]);

    state.click_outside();

    assert!(!state.autocomplete().is_displaying());
    assert_eq!(state.input().text(), "cov");
}

#[test]
fn stale_cat_lookup_does_not_show_after_typing_dog() {
    let mut state = fresh_state();
    let now = Instant::now();
    type_text(&mut state, "cat", now);
    let cat = state.tick(now + DEBOUNCE).expect("cat lookup");

    state.clear_input(now);
    type_text(&mut state, "dog", now);
    let applied = state.apply_completion(Completion::Suggestions {
        generation: cat.generation(),
        query: cat.query().to_string(),
        result: Ok(vec!["category".to_string()]),
    });

    assert!(!applied);
    assert!(!state.autocomplete().is_displaying());
}

// ===== Search =====

#[test]
fn whitespace_submit_emits_nothing_and_changes_nothing() {
    let mut state = fresh_state();
    type_text(&mut state, "   ", Instant::now());

    assert_eq!(state.submit(), None);
    assert_eq!(state.session().phase(), &SearchPhase::Idle);
    assert!(state.history().entries().is_empty());
}

#[test]
fn submit_enters_loading_and_hides_dropdown() {
    let mut state = fresh_state();
    show_suggestions(&mut state, "cov", &["covid"]);

    let command = state.submit();

    assert!(command.is_some());
    assert!(state.session().is_loading());
    assert!(!state.autocomplete().is_displaying());
}

#[test]
fn submit_sends_and_records_trimmed_query() {
    let mut state = fresh_state();
    let now = Instant::now();
    type_text(&mut state, "cat", now);
    let first = state.submit().expect("search command");
    complete_search(&mut state, first, results(1));

    type_text(&mut state, " ", now);
    let command = state.submit();

    assert!(matches!(
        command,
        Some(Command::RunSearch { ref query, .. }) if query == "cat"
    ));
    assert_eq!(state.history().entries(), ["cat".to_string()]);
}

#[test]
fn failed_search_banner_is_dismissed_by_escape() {
    let mut state = fresh_state();
    type_text(&mut state, "bad", Instant::now());
    let command = state.submit().expect("search");

    state.apply_completion(Completion::Search {
        generation: command.generation(),
        query: "bad".to_string(),
        result: Err(ClientError::Status {
            status: 400,
            message: Some("bad query".to_string()),
        }),
    });
    assert!(matches!(state.session().phase(), SearchPhase::Failed { message } if message.contains("bad query")));

    state.dismiss();

    assert_eq!(state.session().phase(), &SearchPhase::Idle);
}

#[test]
fn escape_closes_dropdown_before_banner() {
    let mut state = fresh_state();
    type_text(&mut state, "bad", Instant::now());
    let command = state.submit().expect("search");
    state.apply_completion(Completion::Search {
        generation: command.generation(),
        query: "bad".to_string(),
        result: Err(ClientError::Transport("down".to_string())),
    });
    show_suggestions(&mut state, "x", &["xylophone"]);

    state.dismiss();

    assert!(!state.autocomplete().is_displaying());
    assert!(matches!(state.session().phase(), SearchPhase::Failed { .. }));
}

// ===== Pagination & scrolling =====

#[test]
fn page_change_resets_results_scroll() {
    let mut state = fresh_state();
    type_text(&mut state, "q", Instant::now());
    let command = state.submit().expect("search");
    complete_search(&mut state, command, results(45));

    state.select_next();
    state.select_next();
    assert_eq!(state.results_scroll(), 2);

    state.next_page();

    assert_eq!(state.results_scroll(), 0);
    assert_eq!(
        state.session().pagination().map(|p| p.current_page()),
        Some(2)
    );
}

#[test]
fn go_to_page_clamps_to_last_page() {
    let mut state = fresh_state();
    type_text(&mut state, "q", Instant::now());
    let command = state.submit().expect("search");
    complete_search(&mut state, command, results(45));

    state.go_to_page(42);

    assert_eq!(
        state.session().pagination().map(|p| p.current_page()),
        Some(3)
    );
    assert_eq!(state.session().current_page_items().len(), 5);
}

#[test]
fn results_scroll_stops_at_last_card() {
    let mut state = fresh_state();
    type_text(&mut state, "q", Instant::now());
    let command = state.submit().expect("search");
    complete_search(&mut state, command, results(2));

    for _ in 0..5 {
        state.select_next();
    }

    assert_eq!(state.results_scroll(), 1);
}

#[test]
fn paging_without_results_is_noop() {
    let mut state = fresh_state();
    state.next_page();
    state.prev_page();
    assert_eq!(state.session().pagination(), None);
}

// ===== Application =====

#[test]
fn toggle_theme_persists_choice() {
    let mut state = fresh_state();
    assert_eq!(state.theme(), ThemePreference::Light);

    state.toggle_theme();

    assert_eq!(state.theme(), ThemePreference::Dark);
    assert_eq!(
        state.history().backend().get(THEME_KEY).unwrap().as_deref(),
        Some("dark")
    );
}

#[test]
fn escape_closes_help_when_nothing_else_is_open() {
    let mut state = fresh_state();
    state.toggle_help();

    state.dismiss();

    assert!(!state.help_visible());
}

#[test]
fn search_for_fills_input_and_records_history() {
    let mut state = fresh_state();

    let command = state.search_for("spike protein").expect("command");

    assert_eq!(command.query(), "spike protein");
    assert_eq!(state.input().text(), "spike protein");
    assert_eq!(state.history().entries(), ["spike protein".to_string()]);
}
