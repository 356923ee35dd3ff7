//! Shared query parameter types for API handlers.

use serde::Deserialize;

use crate::error::AppError;

/// Default page when `?page=` is absent.
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size when `?pageSize=` is absent.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Upper bound on `?pageSize=`.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Generic pagination parameters (`?page=&pageSize=`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListParams {
    /// Apply defaults and validate ranges, yielding `(page, page_size)`.
    ///
    /// `page = 0`, `pageSize = 0` and `pageSize > 100` are rejected with a
    /// bad request before any store access. The pagination calculator relies
    /// on `pageSize >= 1`, so a zero must never get past this point.
    pub fn resolve(&self) -> Result<(u32, u32), AppError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 1 {
            return Err(AppError::BadRequest("page must be at least 1".into()));
        }
        if page_size < 1 {
            return Err(AppError::BadRequest("pageSize must be at least 1".into()));
        }
        if page_size > MAX_PAGE_SIZE {
            return Err(AppError::BadRequest(format!(
                "pageSize must not exceed {MAX_PAGE_SIZE}"
            )));
        }

        Ok((page, page_size))
    }
}
