use serde::Serialize;

/// Fixed number of companies returned per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Number of pages needed to hold `total` items, `ceil(total / per_page)`.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Page 0 is treated as the first page.
    pub fn new(page: usize, per_page: usize) -> Self {
        let page = if page == 0 { 1 } else { page };
        Self { page, per_page }
    }

    /// Number of records skipped before this page starts.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

/// Pagination block returned alongside a page of results.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PaginationSummary {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
}

impl PaginationSummary {
    pub fn new(pagination: Pagination, total: usize) -> Self {
        Self {
            page: pagination.page,
            limit: pagination.per_page,
            total,
            pages: total_pages(total, pagination.per_page),
        }
    }
}
