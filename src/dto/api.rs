//! DTOs exposed by the directory API endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::company::Company;
use crate::pagination::PaginationSummary;

/// Query parameters accepted by `GET /api/companies`.
///
/// A `limit` parameter may be sent but is ignored; the page size is fixed.
#[derive(Debug, Default, Deserialize)]
pub struct CompaniesQuery {
    /// 1-based page number, defaults to the first page.
    pub page: Option<usize>,
    /// Case-insensitive substring of the company name.
    pub search: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    #[serde(rename = "type")]
    pub company_type: Option<String>,
    /// `name` (default) or `createdAt`.
    pub sort: Option<String>,
}

/// Page of companies together with its pagination block.
#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<Company>,
    pub pagination: PaginationSummary,
}

/// Body returned for every failed request.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
