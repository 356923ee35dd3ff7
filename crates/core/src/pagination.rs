//! Pagination metadata for list responses.

use serde::Serialize;

/// Derived pagination block carried in `meta.pagination` of list responses.
///
/// Always computed via [`Pagination::compute`], never stored or assembled
/// by hand, so `totalPages` and `hasMore` stay consistent with the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u64,
    pub has_more: bool,
}

impl Pagination {
    /// Compute pagination metadata from the requested page, the page size,
    /// and the total number of matching items.
    ///
    /// `total_pages` is `total / page_size`, plus one when the division has
    /// a remainder. `has_more` is true iff `page < total_pages`. An
    /// out-of-range `page` is reported as-is; the caller treats an empty
    /// item list on such a page as a valid result, not an error.
    ///
    /// Precondition: `page >= 1` and `page_size >= 1`. A `page_size` of 0
    /// must be rejected by parameter validation before reaching this
    /// function; see `ListParams::resolve` in the API crate.
    pub fn compute(page: u32, page_size: u32, total: u64) -> Self {
        let page_size64 = u64::from(page_size);
        let mut total_pages = total / page_size64;
        if total % page_size64 != 0 {
            total_pages += 1;
        }
        let has_more = u64::from(page) < total_pages;

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_more,
        }
    }
}
