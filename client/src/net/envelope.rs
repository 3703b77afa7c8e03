//! List response normalization.
//!
//! List endpoints answer either with a bare JSON array or with a paginated
//! envelope `{count, next, previous, results}`. Views only ever see the
//! normalized `Page`.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::Deserialize;

/// Either response shape a list endpoint may produce.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paginated {
        #[serde(default)]
        count: Option<u64>,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        results: Vec<T>,
    },
    Bare(Vec<T>),
}

/// A normalized list: the items plus the server-reported total.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total item count across all pages. For bare arrays this is the array length.
    pub count: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new(), count: 0, has_next: false, has_previous: false }
    }
}

impl<T> ListEnvelope<T> {
    #[must_use]
    pub fn into_page(self) -> Page<T> {
        match self {
            Self::Paginated { count, next, previous, results } => Page {
                count: count.unwrap_or(results.len() as u64),
                has_next: next.is_some(),
                has_previous: previous.is_some(),
                items: results,
            },
            Self::Bare(items) => Page { count: items.len() as u64, has_next: false, has_previous: false, items },
        }
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.into_page().items
    }
}

impl<T> Page<T> {
    /// Keep only the items matching `keep`, adjusting the count to match.
    #[must_use]
    pub fn filtered(self, keep: impl Fn(&T) -> bool) -> Self {
        let items: Vec<T> = self.items.into_iter().filter(|item| keep(item)).collect();
        Self { count: items.len() as u64, has_next: false, has_previous: false, items }
    }

    /// Cut one 1-based page of `size` items out of a complete result set.
    /// `count` keeps the full total so pagers can size themselves.
    #[must_use]
    pub fn window(self, page: u32, size: u64) -> Self {
        let total = self.items.len() as u64;
        let page = u64::from(page.max(1));
        let start = (page - 1).saturating_mul(size).min(total);
        let end = start.saturating_add(size).min(total);
        let items: Vec<T> = self
            .items
            .into_iter()
            .skip(start as usize)
            .take((end - start) as usize)
            .collect();
        Self { items, count: total, has_next: end < total, has_previous: page > 1 }
    }
}
