//! Page-number pagination for search listings.
//!
//! Pages are 1-indexed. `total` always counts the filtered set before slicing,
//! so callers derive the page count as `ceil(total / page_size)`.
//!
//! ```rust
//! use marketplace_core::common::{PageLink, PageRequest};
//!
//! let request = PageRequest::new(2, 5);
//! let items: Vec<u32> = request.slice((0..12).collect());
//! assert_eq!(items, vec![5, 6, 7, 8, 9]);
//!
//! let nav = request.navigation(12);
//! assert_eq!(nav.total_pages, 3);
//! assert_eq!(nav.links, vec![PageLink::Page(1), PageLink::Page(2), PageLink::Page(3)]);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Page request
// ============================================================================

/// A validated page selection (`page >= 1`, `page_size >= 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Create a page request, clamping both values to at least 1.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.page_size as usize)
    }

    /// Keep only the items of this page. Pages past the end are empty.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.page_size as usize)
            .collect()
    }

    /// Build navigation links for a filtered set of `total` items.
    pub fn navigation(&self, total: usize) -> PageNavigation {
        let total_pages = total_pages(total, self.page_size);
        PageNavigation {
            current_page: self.page,
            total_pages,
            has_previous: self.page > 1,
            has_next: self.page < total_pages,
            links: page_window(self.page, total_pages),
        }
    }
}

/// Number of pages needed for `total` items.
pub fn total_pages(total: usize, page_size: u32) -> u32 {
    let size = page_size.max(1) as usize;
    total.div_ceil(size).min(u32::MAX as usize) as u32
}

// ============================================================================
// Navigation
// ============================================================================

/// One entry of the page navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageLink {
    Page(u32),
    /// Marks skipped page numbers between two links.
    Gap,
}

/// Page information for a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNavigation {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub links: Vec<PageLink>,
}

/// First page, last page, and the neighbours of `current`, with gaps between
/// non-consecutive numbers.
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageLink> {
    let mut links = Vec::new();
    let mut previous: Option<u32> = None;

    for page in 1..=total_pages {
        let visible = page == 1 || page == total_pages || page.abs_diff(current) <= 1;
        if !visible {
            continue;
        }
        if let Some(prev) = previous {
            if page - prev > 1 {
                links.push(PageLink::Gap);
            }
        }
        links.push(PageLink::Page(page));
        previous = Some(page);
    }

    links
}
