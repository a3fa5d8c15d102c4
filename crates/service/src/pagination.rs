//! Pagination utilities for service layer
//!
//! `Pagination` carries the raw `skip`/`limit` query values; `Page` is the
//! checked form every list query takes.

use models::errors::ValidationError;
use serde::Deserialize;

pub const DEFAULT_LIMIT: u64 = 100;
pub const MAX_LIMIT: u64 = 1000;

/// Raw pagination parameters as they arrive from a caller.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct Pagination {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    /// Apply defaults (`skip=0`, `limit=100`) and check `skip >= 0`, `1 <= limit <= 1000`.
    pub fn validate(self) -> Result<Page, ValidationError> {
        Page::new(self.skip.unwrap_or(0), self.limit.unwrap_or(DEFAULT_LIMIT as i64))
    }
}

/// Checked window over an ordered result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    skip: u64,
    limit: u64,
}

impl Page {
    pub fn new(skip: i64, limit: i64) -> Result<Self, ValidationError> {
        let skip = u64::try_from(skip)
            .map_err(|_| ValidationError::new("skip", "must be greater than or equal to 0"))?;
        let limit = u64::try_from(limit)
            .ok()
            .filter(|l| (1..=MAX_LIMIT).contains(l))
            .ok_or_else(|| ValidationError::new("limit", format!("must be between 1 and {MAX_LIMIT}")))?;
        Ok(Self { skip, limit })
    }

    pub fn skip(&self) -> u64 { self.skip }

    pub fn limit(&self) -> u64 { self.limit }
}

impl Default for Page {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}

#[cfg(test)]
mod tests {
    use super::{Page, Pagination, DEFAULT_LIMIT};

    #[test]
    fn missing_values_use_defaults() {
        let page = Pagination::default().validate().unwrap();
        assert_eq!(page, Page::default());
        assert_eq!(page.skip(), 0);
        assert_eq!(page.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn accepts_limit_bounds() {
        assert_eq!(Page::new(0, 1).unwrap().limit(), 1);
        assert_eq!(Page::new(5, 1000).unwrap().limit(), 1000);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Page::new(-1, 10).unwrap_err().field, "skip");
        assert_eq!(Page::new(0, 0).unwrap_err().field, "limit");
        assert_eq!(Page::new(0, 1001).unwrap_err().field, "limit");
        assert_eq!(Page::new(0, -5).unwrap_err().field, "limit");
    }
}
