//! Pagination over a result list.
//!
//! Pages are 1-based and fixed at [`PAGE_SIZE`] items. The page bar shows
//! every page when there are at most [`MAX_PAGE_BUTTONS`] of them, otherwise
//! the first, the last, and the current page with its neighbours, joined by
//! ellipses.

use std::ops::Range;

/// Results per page.
pub const PAGE_SIZE: usize = 20;

/// Page counts up to this value get one button per page.
pub const MAX_PAGE_BUTTONS: usize = 7;

/// One element of the page bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// Previous-page button.
    Previous {
        /// False on the first page.
        enabled: bool,
    },
    /// A numbered page button.
    Page {
        /// 1-based page number.
        number: usize,
        /// True for the current page.
        active: bool,
    },
    /// Gap marker between non-adjacent page numbers.
    Ellipsis,
    /// Next-page button.
    Next {
        /// False on the last page.
        enabled: bool,
    },
}

impl PageControl {
    /// Page this control navigates to when activated, if any.
    pub fn target(&self, current: usize) -> Option<usize> {
        match *self {
            PageControl::Previous { enabled: true } => Some(current - 1),
            PageControl::Next { enabled: true } => Some(current + 1),
            PageControl::Page { number, .. } => Some(number),
            _ => None,
        }
    }
}

/// Number of pages needed for `item_count` items.
pub fn total_pages(item_count: usize) -> usize {
    item_count.div_ceil(PAGE_SIZE)
}

/// Compute the page bar for `current` of `total` pages.
///
/// Previous and Next are always present; numbered buttons follow the
/// compact layout described in the module docs.
pub fn page_controls(current: usize, total: usize) -> Vec<PageControl> {
    let mut controls = vec![PageControl::Previous {
        enabled: current > 1,
    }];

    let page = |number: usize| PageControl::Page {
        number,
        active: number == current,
    };

    if total <= MAX_PAGE_BUTTONS {
        controls.extend((1..=total).map(page));
    } else {
        controls.push(page(1));
        if current > 3 {
            controls.push(PageControl::Ellipsis);
        }

        let start = current.saturating_sub(1).max(2);
        let end = (current + 1).min(total - 1);
        controls.extend((start..=end).map(page));

        if current + 2 < total {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(page(total));
    }

    controls.push(PageControl::Next {
        enabled: current < total,
    });
    controls
}

// ===== Pagination =====

/// Current page over a list of `item_count` results.
///
/// Invariant: `1 <= current_page <= total_pages` whenever `item_count > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    item_count: usize,
}

impl Pagination {
    /// Start at page 1.
    pub fn new(item_count: usize) -> Self {
        Self {
            current_page: 1,
            item_count,
        }
    }

    /// 1-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages.
    pub fn total_pages(&self) -> usize {
        total_pages(self.item_count)
    }

    /// Page bar is shown only with more than one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages() > 1
    }

    /// Index range of the current page within the full list.
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.current_page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.item_count);
        start.min(end)..end
    }

    /// The items of the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.page_range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    /// Go to page `page`, clamped to the valid range.
    ///
    /// Returns true if the page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let clamped = page.clamp(1, self.total_pages().max(1));
        let changed = clamped != self.current_page;
        self.current_page = clamped;
        changed
    }

    /// Advance one page. Returns true if the page changed.
    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    /// Go back one page. Returns true if the page changed.
    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Page bar for the current page.
    pub fn controls(&self) -> Vec<PageControl> {
        page_controls(self.current_page, self.total_pages())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
