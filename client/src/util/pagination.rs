//! Page arithmetic for paginated lists.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Items per page used by the marketplace and certification lists.
pub const PAGE_SIZE: u64 = 12;

/// Number of pages needed to show `count` items, `page_size` at a time.
#[must_use]
pub fn total_pages(count: u64, page_size: u64) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(count.div_ceil(page_size)).unwrap_or(u32::MAX)
}

/// Position within a paginated list (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total: u32,
}

impl Pager {
    /// Build a pager, clamping `current` into `1..=total`.
    #[must_use]
    pub fn new(current: u32, total: u32) -> Self {
        Self { current: current.clamp(1, total.max(1)), total }
    }

    /// Controls are only shown when there is more than one page.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.total > 1
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    #[must_use]
    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current - 1)
    }

    #[must_use]
    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current + 1)
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.total)
    }
}
