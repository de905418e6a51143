//! Form definitions backing the directory routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod company;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("name: value cannot be empty")]
    InvalidName,

    #[error("industry: value cannot be empty")]
    InvalidIndustry,

    #[error("location: value cannot be empty")]
    InvalidLocation,

    #[error("size: `{0}` is not one of 1-10, 11-50, 51-200, 201-500, 500+")]
    InvalidSize(String),

    #[error("type: `{0}` is not one of Private, Public, Non-Profit, Government")]
    InvalidCompanyType(String),

    #[error("founded: `{0}` is not a year")]
    InvalidFounded(String),

    #[error("logo: invalid url")]
    InvalidLogoUrl,

    #[error("website: invalid url")]
    InvalidWebsiteUrl,
}
