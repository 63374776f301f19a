//! Tests for pagination.

use super::*;

fn numbers(controls: &[PageControl]) -> Vec<String> {
    controls
        .iter()
        .map(|control| match control {
            PageControl::Previous { enabled } => format!("prev:{}", enabled),
            PageControl::Page { number, active: true } => format!("[{}]", number),
            PageControl::Page { number, .. } => number.to_string(),
            PageControl::Ellipsis => "...".to_string(),
            PageControl::Next { enabled } => format!("next:{}", enabled),
        })
        .collect()
}

// ===== total_pages =====

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0), 0);
    assert_eq!(total_pages(1), 1);
    assert_eq!(total_pages(20), 1);
    assert_eq!(total_pages(21), 2);
    assert_eq!(total_pages(45), 3);
}

// ===== page_controls =====

#[test]
fn middle_of_ten_pages_uses_both_ellipses() {
    assert_eq!(
        numbers(&page_controls(5, 10)),
        vec!["prev:true", "1", "...", "4", "[5]", "6", "...", "10", "next:true"]
    );
}

#[test]
fn five_pages_show_every_button_without_ellipsis() {
    let controls = page_controls(2, 5);

    assert_eq!(
        numbers(&controls),
        vec!["prev:true", "1", "[2]", "3", "4", "5", "next:true"]
    );
    assert!(!controls.contains(&PageControl::Ellipsis));
}

#[test]
fn seven_pages_still_show_every_button() {
    assert_eq!(page_controls(4, 7).len(), 7 + 2);
}

#[test]
fn first_page_disables_previous_and_skips_leading_ellipsis() {
    assert_eq!(
        numbers(&page_controls(1, 10)),
        vec!["prev:false", "[1]", "2", "...", "10", "next:true"]
    );
}

#[test]
fn last_page_disables_next_and_skips_trailing_ellipsis() {
    assert_eq!(
        numbers(&page_controls(10, 10)),
        vec!["prev:true", "1", "...", "9", "[10]", "next:false"]
    );
}

#[test]
fn page_three_has_no_leading_ellipsis() {
    assert_eq!(
        numbers(&page_controls(3, 10)),
        vec!["prev:true", "1", "2", "[3]", "4", "...", "10", "next:true"]
    );
}

#[test]
fn page_eight_of_ten_has_no_trailing_ellipsis() {
    assert_eq!(
        numbers(&page_controls(8, 10)),
        vec!["prev:true", "1", "...", "7", "[8]", "9", "10", "next:true"]
    );
}

#[test]
fn control_targets() {
    assert_eq!(PageControl::Previous { enabled: true }.target(3), Some(2));
    assert_eq!(PageControl::Previous { enabled: false }.target(1), None);
    assert_eq!(PageControl::Next { enabled: true }.target(3), Some(4));
    assert_eq!(PageControl::Ellipsis.target(3), None);
    assert_eq!(
        PageControl::Page {
            number: 9,
            active: false
        }
        .target(3),
        Some(9)
    );
}

// ===== Pagination =====

#[test]
fn forty_five_items_make_three_pages_with_five_on_the_last() {
    let items: Vec<usize> = (0..45).collect();
    let mut pagination = Pagination::new(items.len());

    assert_eq!(pagination.total_pages(), 3);
    assert!(pagination.go_to_page(3));

    let page = pagination.slice(&items);
    assert_eq!(page.len(), 5);
    assert_eq!(page[0], 40);
}

#[test]
fn first_page_holds_page_size_items() {
    let items: Vec<usize> = (0..45).collect();
    let pagination = Pagination::new(items.len());

    assert_eq!(pagination.slice(&items), &items[..20]);
}

#[test]
fn go_to_page_clamps_out_of_range_requests() {
    let mut pagination = Pagination::new(45);

    pagination.go_to_page(99);
    assert_eq!(pagination.current_page(), 3);

    pagination.go_to_page(0);
    assert_eq!(pagination.current_page(), 1);
}

#[test]
fn next_and_prev_stop_at_bounds() {
    let mut pagination = Pagination::new(30);

    assert!(!pagination.prev_page());
    assert!(pagination.next_page());
    assert!(!pagination.next_page());
    assert_eq!(pagination.current_page(), 2);
}

#[test]
fn single_page_hides_controls() {
    assert!(!Pagination::new(20).is_visible());
    assert!(Pagination::new(21).is_visible());
}
