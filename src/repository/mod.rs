use std::sync::Arc;

use crate::{
    db::{Database, DbConnection, DbPool},
    domain::company::{Company, NewCompany},
    pagination::Pagination,
    repository::errors::RepositoryResult,
};

pub mod company;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Order in which a company listing is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompanySort {
    /// Alphabetical by name, ascending.
    #[default]
    Name,
    /// Newest first.
    CreatedAt,
}

impl CompanySort {
    /// `name` sorts by name; every other key falls back to newest first.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "name" => CompanySort::Name,
            _ => CompanySort::CreatedAt,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompanyListQuery {
    /// Case-insensitive substring of the company name.
    pub search: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    pub company_type: Option<String>,
    pub sort: CompanySort,
    pub pagination: Option<Pagination>,
}

/// Keeps only non-empty, trimmed filter values.
fn filter_value(value: impl Into<String>) -> Option<String> {
    let value = value.into().trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}

impl CompanyListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = filter_value(term);
        self
    }

    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = filter_value(industry);
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = filter_value(location);
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = filter_value(size);
        self
    }

    pub fn company_type(mut self, company_type: impl Into<String>) -> Self {
        self.company_type = filter_value(company_type);
        self
    }

    pub fn sort(mut self, sort: CompanySort) -> Self {
        self.sort = sort;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

pub trait CompanyReader {
    /// Returns the total number of matches and the requested page of them.
    fn list_companies(&self, query: CompanyListQuery) -> RepositoryResult<(usize, Vec<Company>)>;
}

pub trait CompanyWriter {
    fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    database: Arc<Database>,
}

impl DieselRepository {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Builds a repository around an already established pool.
    pub fn from_pool(pool: DbPool) -> Self {
        Self::new(Arc::new(Database::from_pool(pool)))
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        let pool = self.database.connect()?;
        Ok(crate::db::get_connection(&pool)?)
    }
}
