//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Maximum number of items a client may request per page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl PageRequest {
    /// Clamps the page size to `1..=MAX_PAGE_SIZE` and the page to at least 1.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Calculates the offset for database queries.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    #[serde(flatten)]
    pub meta: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number.
    pub current_page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of items across all pages.
    pub total_items: u64,
}

impl PageMeta {
    /// Computes pagination metadata for a total item count.
    #[must_use]
    pub fn compute(page: u32, page_size: u32, total_items: u64) -> Self {
        let per_page = u64::from(page_size.max(1));
        let total_pages = if total_items == 0 {
            1
        } else {
            u32::try_from(total_items.div_ceil(per_page)).unwrap_or(u32::MAX)
        };

        Self {
            current_page: page,
            total_pages,
            total_items,
        }
    }
}

impl<T> PageResponse<T> {
    /// Creates a new paginated response.
    #[must_use]
    pub fn new(data: Vec<T>, page: u32, page_size: u32, total_items: u64) -> Self {
        Self {
            data,
            meta: PageMeta::compute(page, page_size, total_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 10);
    }

    #[test]
    fn test_page_size_capped() {
        let req = PageRequest {
            page: 0,
            page_size: 5000,
        }
        .clamped();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_offset_and_limit() {
        let req = PageRequest {
            page: 3,
            page_size: 10,
        };
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 10);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(10, 1)]
    #[case(11, 2)]
    #[case(25, 3)]
    fn test_total_pages(#[case] total: u64, #[case] expected_pages: u32) {
        let meta = PageMeta::compute(1, 10, total);
        assert_eq!(meta.total_pages, expected_pages);
        assert_eq!(meta.total_items, total);
    }
}
