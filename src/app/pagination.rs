//! Fixed-size pagination over the filtered view.

use std::ops::Range;

/// Cards shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Page pointer over a filtered set of `total_items` records.
///
/// Pages are 1-indexed. With an empty filtered set there are zero pages and
/// the pointer rests on page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
    total_items: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Creates a pagination controller; a zero page size falls back to
    /// [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            current_page: 1,
            total_items: 0,
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total_items / page_size)`; zero when there is nothing to show.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Called whenever the filtered set is recomputed: records the new size and
    /// moves back to page 1 unconditionally.
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    /// Pulls the pointer back inside `[1, total_pages]`.
    pub fn clamp(&mut self) {
        self.current_page = self.current_page.min(self.total_pages()).max(1);
    }

    /// Moves to page `page`, clamped to `[1, total_pages]`.
    ///
    /// Returns `true` if the current page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let before = self.current_page;
        self.current_page = page;
        self.clamp();
        before != self.current_page
    }

    /// Advances one page; a no-op on the last page.
    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page.saturating_add(1))
    }

    /// Goes back one page; a no-op on the first page.
    pub fn previous(&mut self) -> bool {
        self.go_to(self.current_page.saturating_sub(1))
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Index range of the current page within the filtered set.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start..end
    }

    /// Slice of `items` shown on the current page.
    ///
    /// `items` must be the filtered set this pagination was last reset with.
    #[must_use]
    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }
}
