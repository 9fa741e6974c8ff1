//! Pagination inputs.
//!
//! The query layer pages with offset/limit, so a zero or negative page would
//! either error or return an unbounded result depending on the backing store.
//! Every caller-supplied page goes through [`normalize_pagination`] first.

use serde::{Deserialize, Serialize};

/// A normalized page: both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageWindow {
    number: u64,
    size: u64,
}

impl PageWindow {
    /// 1-based page number.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Maximum number of items on the page.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Number of items to skip before this page.
    pub fn offset(&self) -> u64 {
        (self.number - 1).saturating_mul(self.size)
    }

    /// Select this page out of an already ordered sequence.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(self.size).unwrap_or(usize::MAX);
        items.iter().skip(offset).take(size).cloned().collect()
    }
}

/// Clamp a page number and size to at least 1.
///
/// Never fails; callers that want stricter limits must validate upstream.
///
/// ```
/// use contact_directory::models::normalize_pagination;
///
/// let window = normalize_pagination(3, 0);
/// assert_eq!((window.number(), window.size()), (3, 1));
/// ```
pub fn normalize_pagination(page_number: i64, page_size: i64) -> PageWindow {
    PageWindow {
        number: page_number.max(1) as u64,
        size: page_size.max(1) as u64,
    }
}

/// Page parameters as supplied by a caller; either value may be omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl PageRequest {
    /// A request with both values given.
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number: Some(page_number),
            page_size: Some(page_size),
        }
    }

    /// Fill omitted values (page 1, `default_size`) and normalize.
    pub fn resolve(&self, default_size: u64) -> PageWindow {
        let default_size = i64::try_from(default_size).unwrap_or(i64::MAX);
        normalize_pagination(
            self.page_number.unwrap_or(1),
            self.page_size.unwrap_or(default_size),
        )
    }
}
