//! Page Windows
//!
//! Slicing a list into pages and the derived page bookkeeping.

use serde::{Deserialize, Serialize};

use crate::controls::{render_controls, PageControl};

/// Number of pages needed for `total_items` (0 when there are no items)
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Items shown on page `page_number` (1-based).
///
/// Out-of-range page numbers are clamped to `1..=total_pages`, so page 0
/// shows the first page and anything past the end shows the last one.
/// A `page_size` of 0 is treated as 1.
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let size = page_size.max(1);
    let last = total_pages(items.len(), size).max(1);
    let number = page_number.clamp(1, last);
    let start = ((number - 1) * size).min(items.len());
    let end = (start + size).min(items.len());
    &items[start..end]
}

/// Pagination state of one list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl PageState {
    pub fn new(current_page: usize, page_size: usize, total_items: usize) -> Self {
        Self {
            current_page,
            page_size: page_size.max(1),
            total_items,
        }
        .clamped()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Same state with `current_page` pulled into `1..=max(total_pages, 1)`
    pub fn clamped(self) -> Self {
        let last = self.total_pages().max(1);
        Self {
            current_page: self.current_page.clamp(1, last),
            ..self
        }
    }

    /// 1-based index of the first item on the current page (0 when empty)
    pub fn first_item(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            (self.current_page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last item on the current page (0 when empty)
    pub fn last_item(&self) -> usize {
        (self.current_page * self.page_size).min(self.total_items)
    }

    pub fn controls(&self) -> Vec<PageControl> {
        render_controls(self.current_page, self.total_pages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_pages_partition_items() {
        let items: Vec<u32> = (0..23).collect();
        for size in 1..=25 {
            let total = total_pages(items.len(), size);
            let rebuilt: Vec<u32> = (1..=total)
                .flat_map(|p| page(&items, p, size).iter().copied())
                .collect();
            assert_eq!(rebuilt, items, "page size {}", size);
        }
    }

    #[test]
    fn test_page_slices() {
        let items = ["a", "b", "c", "d", "e"];
        assert_eq!(page(&items, 1, 2), &["a", "b"]);
        assert_eq!(page(&items, 3, 2), &["e"]);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let items = ["a", "b", "c", "d", "e"];
        assert_eq!(page(&items, 0, 2), &["a", "b"]);
        assert_eq!(page(&items, 9, 2), &["e"]);

        let empty: [u8; 0] = [];
        assert!(page(&empty, 3, 10).is_empty());
    }

    #[test]
    fn test_page_state_clamps() {
        let state = PageState::new(7, 10, 25);
        assert_eq!(state.current_page, 3);
        assert_eq!(state.total_pages(), 3);

        let empty = PageState::new(4, 10, 0);
        assert_eq!(empty.current_page, 1);
        assert_eq!(empty.total_pages(), 0);
        assert!(empty.controls().is_empty());
    }

    #[test]
    fn test_item_range() {
        let state = PageState::new(3, 10, 25);
        assert_eq!((state.first_item(), state.last_item()), (21, 25));

        let state = PageState::new(1, 10, 0);
        assert_eq!((state.first_item(), state.last_item()), (0, 0));
    }
}
