//! Property-based tests for history and pagination invariants.
//!
//! Tests validate:
//! 1. History stays bounded, unique and most-recent-first after any record sequence
//! 2. History matches are a case-insensitive, order-preserving filter
//! 3. Page navigation never leaves the valid range
//! 4. Page controls always show the first and last page and the active page

use proptest::prelude::*;
use sift::state::{page_controls, PageControl, Pagination, PAGE_SIZE};
use sift::store::{MemoryStore, SuggestionStore, HISTORY_LIMIT};

fn store() -> SuggestionStore {
    SuggestionStore::load(Box::new(MemoryStore::new()))
}

/// Small alphabet so repeats and substring matches actually happen.
fn query() -> impl Strategy<Value = String> {
    "[abcAB ]{1,6}"
}

// ===== Property 1: History Shape =====

proptest! {
    #[test]
    fn history_is_bounded_unique_and_recent_first(queries in prop::collection::vec(query(), 0..40)) {
        let mut history = store();
        for q in &queries {
            history.record(q);
        }

        let entries = history.entries();
        prop_assert!(entries.len() <= HISTORY_LIMIT);

        let unique: std::collections::HashSet<_> = entries.iter().collect();
        prop_assert_eq!(unique.len(), entries.len(), "entries must be unique");

        if let Some(last) = queries.last() {
            prop_assert_eq!(&entries[0], last, "latest query comes first");
        }
    }

    #[test]
    fn history_survives_reload(queries in prop::collection::vec(query(), 1..20)) {
        let mut history = store();
        for q in &queries {
            history.record(q);
        }
        let expected = history.entries().to_vec();

        let reloaded = SuggestionStore::load(Box::new(clone_backend(&history)));

        prop_assert_eq!(reloaded.entries(), &expected[..]);
    }
}

fn clone_backend(history: &SuggestionStore) -> MemoryStore {
    use sift::store::{KeyValueStore, HISTORY_KEY};

    let mut copy = MemoryStore::new();
    if let Ok(Some(raw)) = history.backend().get(HISTORY_KEY) {
        copy.set(HISTORY_KEY, &raw).unwrap();
    }
    copy
}

// ===== Property 2: History Matching =====

proptest! {
    #[test]
    fn matches_are_filtered_and_ordered(
        queries in prop::collection::vec(query(), 0..20),
        needle in "[abAB]{1,2}",
        limit in 0usize..5,
    ) {
        let mut history = store();
        for q in &queries {
            history.record(q);
        }

        let matches = history.matches(&needle, limit);
        prop_assert!(matches.len() <= limit);

        let lowered = needle.to_lowercase();
        let expected: Vec<String> = history
            .entries()
            .iter()
            .filter(|e| e.to_lowercase().contains(&lowered))
            .take(limit)
            .cloned()
            .collect();
        prop_assert_eq!(matches, expected);
    }
}

// ===== Property 3: Page Navigation =====

proptest! {
    #[test]
    fn navigation_stays_in_range(
        item_count in 1usize..500,
        jumps in prop::collection::vec(0usize..40, 0..20),
    ) {
        let mut pagination = Pagination::new(item_count);
        let items: Vec<usize> = (0..item_count).collect();

        for jump in jumps {
            pagination.go_to_page(jump);
            prop_assert!(pagination.current_page() >= 1);
            prop_assert!(pagination.current_page() <= pagination.total_pages());

            let page = pagination.slice(&items);
            prop_assert!(!page.is_empty());
            prop_assert!(page.len() <= PAGE_SIZE);
            prop_assert_eq!(page[0], (pagination.current_page() - 1) * PAGE_SIZE);
        }
    }
}

// ===== Property 4: Page Controls =====

proptest! {
    #[test]
    fn controls_include_ends_and_active_page(total in 1usize..200, seed in 0usize..200) {
        let current = seed % total + 1;
        let controls = page_controls(current, total);

        let pages: Vec<(usize, bool)> = controls
            .iter()
            .filter_map(|c| match c {
                PageControl::Page { number, active } => Some((*number, *active)),
                _ => None,
            })
            .collect();

        prop_assert_eq!(pages.first().map(|p| p.0), Some(1));
        prop_assert_eq!(pages.last().map(|p| p.0), Some(total));
        prop_assert_eq!(
            pages.iter().filter(|p| p.1).map(|p| p.0).collect::<Vec<_>>(),
            vec![current]
        );
        prop_assert!(pages.windows(2).all(|w| w[0].0 < w[1].0), "ascending");

        prop_assert_eq!(controls.first(), Some(&PageControl::Previous { enabled: current > 1 }));
        prop_assert_eq!(controls.last(), Some(&PageControl::Next { enabled: current < total }));
    }
}
