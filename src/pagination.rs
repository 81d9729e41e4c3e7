// src/pagination.rs

//! In-memory pagination
//!
//! Pages are 1-based. A page number below 1 is read as the first page, and a
//! page past the end comes back empty rather than failing.

use serde::Serialize;

/// Page size used by the ingredient list
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of a collection plus the numbers needed to render navigation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Convert the items while keeping the page metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            current_page: self.current_page,
            total_pages: self.total_pages,
            page_size: self.page_size,
        }
    }
}

/// Slice `items` into the requested page
///
/// A `page_size` of zero is treated as one.
pub fn paginate<T: Clone>(items: &[T], page: i64, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let current_page = usize::try_from(page).unwrap_or(0).max(1);
    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size).max(1);

    let start = (current_page - 1).saturating_mul(page_size);
    let slice: &[T] = if start >= total_count {
        &[]
    } else {
        let end = start.saturating_add(page_size).min(total_count);
        &items[start..end]
    };

    Page {
        items: slice.to_vec(),
        total_count,
        current_page,
        total_pages,
        page_size,
    }
}
