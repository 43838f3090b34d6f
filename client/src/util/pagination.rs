//! Local "load more" pagination over an already fetched list.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Cards added per "load more" click.
pub const BLOG_PAGE_SIZE: usize = 21;

/// Visible window over `total` items after `pages` pages have been revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub shown: usize,
    pub total: usize,
}

impl PageWindow {
    #[must_use]
    pub fn new(total: usize, pages: usize, page_size: usize) -> Self {
        let shown = pages.max(1).saturating_mul(page_size).min(total);
        Self { shown, total }
    }

    /// Whether a "load more" control should be offered.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.shown < self.total
    }

    /// "Mostrando X de Y campañas" line.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Mostrando {} de {} campañas", self.shown, self.total)
    }
}
