//! Pagination Controls
//!
//! Builds the control sequence shown under a paginated list.
//! Large page counts are compressed around the current page with ellipses.

use serde::{Deserialize, Serialize};

/// Page counts up to this value are rendered without ellipses
pub const MAX_UNCOMPRESSED_PAGES: usize = 7;

/// Number of pages in the sliding middle window
const WINDOW_WIDTH: usize = 5;

/// One entry of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageControl {
    /// Link to the previous page
    PrevLink(usize),
    /// Previous button on the first page
    PrevDisabled,
    /// Link to another page
    PageLink(usize),
    /// The page being displayed
    ActivePage(usize),
    /// Marker for omitted page numbers (not interactive)
    Ellipsis,
    /// Link to the next page
    NextLink(usize),
    /// Next button on the last page
    NextDisabled,
}

impl PageControl {
    /// Page this control navigates to, if it is a link
    pub fn target(&self) -> Option<usize> {
        match *self {
            PageControl::PrevLink(n) | PageControl::PageLink(n) | PageControl::NextLink(n) => Some(n),
            _ => None,
        }
    }

    /// Page number displayed by a numbered control
    pub fn number(&self) -> Option<usize> {
        match *self {
            PageControl::PageLink(n) | PageControl::ActivePage(n) => Some(n),
            _ => None,
        }
    }
}

fn numbered(page: usize, current: usize) -> PageControl {
    if page == current {
        PageControl::ActivePage(page)
    } else {
        PageControl::PageLink(page)
    }
}

/// Render the pagination controls for `current_page` of `total_pages`.
///
/// Returns an empty sequence when there is at most one page.
/// A `current_page` outside `1..=total_pages` is clamped first.
pub fn render_controls(current_page: usize, total_pages: usize) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let current = current_page.clamp(1, total_pages);
    let mut controls = Vec::with_capacity(MAX_UNCOMPRESSED_PAGES + 4);

    controls.push(if current == 1 {
        PageControl::PrevDisabled
    } else {
        PageControl::PrevLink(current - 1)
    });

    if total_pages <= MAX_UNCOMPRESSED_PAGES {
        controls.extend((1..=total_pages).map(|page| numbered(page, current)));
    } else {
        controls.push(numbered(1, current));

        let mut start = current.saturating_sub(2).max(2);
        let mut end = (current + 2).min(total_pages - 1);
        // Anchor the window near either edge
        if current <= 4 {
            end = WINDOW_WIDTH;
        }
        if current + 3 >= total_pages {
            start = total_pages - (WINDOW_WIDTH - 1);
        }

        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
        controls.extend((start..=end).map(|page| numbered(page, current)));
        if end < total_pages - 1 {
            controls.push(PageControl::Ellipsis);
        }

        controls.push(numbered(total_pages, current));
    }

    controls.push(if current == total_pages {
        PageControl::NextDisabled
    } else {
        PageControl::NextLink(current + 1)
    });

    controls
}
