/// Pagination support for queries
///
/// Standard pagination model used by the search endpoint
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Validated pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    page: i64,
    limit: i64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    /// Validate raw page/limit values.
    ///
    /// The page is checked before the limit, so a request with both out of
    /// range reports the page error.
    pub fn new(page: i64, limit: i64) -> AppResult<Self> {
        if page < 1 {
            return Err(AppError::InvalidInput(
                "Page must be a positive integer".to_string(),
            ));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(AppError::InvalidInput(
                "Limit must be between 1 and 100".to_string(),
            ));
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    /// Get limit for database queries
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Calculate offset for database queries; saturates for absurd pages,
    /// which then read past the last row
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Build page metadata from the per-kind totals
    pub fn metadata(&self, total_anime: u64, total_episodes: u64) -> PageMetadata {
        let total_results = total_anime + total_episodes;
        let limit = self.limit as u64;
        let total_pages = total_results.div_ceil(limit);

        PageMetadata {
            page: self.page,
            limit: self.limit,
            total_pages,
            total_results,
            total_anime,
            total_episodes,
            has_next_page: (self.page as u64) < total_pages,
            has_prev_page: self.page > 1,
        }
    }
}

/// Pagination block of a search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub page: i64,
    pub limit: i64,
    pub total_pages: u64,
    pub total_results: u64,
    pub total_anime: u64,
    pub total_episodes: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Items of one entity kind together with the count across all pages
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_page() {
        let err = PaginationParams::new(0, 20).unwrap_err();
        assert_eq!(err.client_message(), "Page must be a positive integer");
    }

    #[test]
    fn test_rejects_limit_out_of_range() {
        for limit in [0, 101, 150, -5] {
            let err = PaginationParams::new(1, limit).unwrap_err();
            assert_eq!(err.client_message(), "Limit must be between 1 and 100");
        }
    }

    #[test]
    fn test_page_checked_before_limit() {
        let err = PaginationParams::new(0, 500).unwrap_err();
        assert_eq!(err.client_message(), "Page must be a positive integer");
    }

    #[test]
    fn test_offset() {
        assert_eq!(PaginationParams::new(1, 20).unwrap().offset(), 0);
        assert_eq!(PaginationParams::new(3, 25).unwrap().offset(), 50);
    }

    #[test]
    fn test_huge_page_offset_saturates() {
        let params = PaginationParams::new(i64::MAX, 20).unwrap();
        assert_eq!(params.offset(), i64::MAX);

        let params = PaginationParams::new(100_000_000_000_000_000, 100).unwrap();
        assert_eq!(params.offset(), i64::MAX);

        let meta = params.metadata(5, 0);
        assert!(!meta.has_next_page);
        assert!(meta.has_prev_page);
    }

    #[test]
    fn test_metadata_rounds_pages_up() {
        let params = PaginationParams::new(2, 10).unwrap();
        let meta = params.metadata(15, 6);
        assert_eq!(meta.total_results, 21);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next_page);
        assert!(meta.has_prev_page);
    }

    #[test]
    fn test_metadata_last_and_empty_pages() {
        let last = PaginationParams::new(3, 10).unwrap().metadata(30, 0);
        assert_eq!(last.total_pages, 3);
        assert!(!last.has_next_page);

        let empty = PaginationParams::new(1, 20).unwrap().metadata(0, 0);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_next_page);
        assert!(!empty.has_prev_page);
    }

    #[test]
    fn test_metadata_pagination_grid() {
        for total in 0u64..60 {
            for limit in [1i64, 7, 20, 100] {
                let params = PaginationParams::new(2, limit).unwrap();
                let meta = params.metadata(total, 0);
                let expected = (total as f64 / limit as f64).ceil() as u64;
                assert_eq!(meta.total_pages, expected);
                assert_eq!(meta.has_next_page, 2 < expected);
            }
        }
    }
}
