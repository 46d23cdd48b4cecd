//! Page slicing over the filtered task list. Pages are 1-based.

use serde::{Deserialize, Serialize};

/// Number of page buttons shown around the current page
pub const PAGE_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Pulls `current_page` back into `[1, max(1, total_pages)]`
    pub fn clamp(&mut self, item_count: usize) {
        let last = total_pages(item_count, self.page_size).max(1);
        self.current_page = self.current_page.clamp(1, last);
    }

    /// Moves to `page` when it exists; returns whether anything changed
    pub fn go_to(&mut self, page: usize, item_count: usize) -> bool {
        let total = total_pages(item_count, self.page_size);
        if page < 1 || page > total || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }
}

/// `ceil(count / size)`; zero for an empty list
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

/// Slice `[(page-1)*size, page*size)` clamped to the input bounds
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// "Showing X to Y of N" figures for the pagination footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSummary {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl PageSummary {
    pub fn new(state: PageState, item_count: usize) -> Self {
        let first = ((state.current_page.saturating_sub(1)) * state.page_size + 1).min(item_count);
        let last = (state.current_page * state.page_size).min(item_count);
        Self {
            first,
            last,
            total: item_count,
        }
    }
}

/// Up to `PAGE_WINDOW` consecutive page numbers, centred on `current`
/// where possible and kept inside `[1, total]`.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    let width = PAGE_WINDOW.min(total);
    let max_start = total - width + 1;
    let start = current.saturating_sub(width / 2).clamp(1, max_start);
    (start..start + width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_paginate_slices_and_clamps() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23, 24, 25]);
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate::<u32>(&[], 1, 10).is_empty());
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut state = PageState::new(10);
        assert!(state.go_to(3, 25));
        assert!(!state.go_to(4, 25));
        assert_eq!(state.current_page, 3);
        assert!(!state.go_to(0, 25));
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn test_clamp() {
        let mut state = PageState {
            current_page: 3,
            page_size: 10,
        };
        state.clamp(20);
        assert_eq!(state.current_page, 2);
        state.clamp(0);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_summary() {
        let state = PageState {
            current_page: 3,
            page_size: 10,
        };
        assert_eq!(
            PageSummary::new(state, 25),
            PageSummary {
                first: 21,
                last: 25,
                total: 25
            }
        );
        assert_eq!(PageSummary::new(PageState::new(10), 0), PageSummary::default());
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 0), Vec::<usize>::new());
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
    }
}
