//! Shared helpers for integration tests.

#![allow(dead_code)]

use company_directory::db::{DEFAULT_CONNECTION_TIMEOUT, DbPool, establish_connection_pool};
use company_directory::domain::company::{Company, NewCompany};
use company_directory::domain::types::{
    CompanyName, CompanySize, CompanyType, IndustryName, LocationName,
};
use company_directory::repository::{CompanyWriter, DieselRepository};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Temporary SQLite database with all migrations applied.
///
/// The backing directory is removed when the value is dropped.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(&path.to_string_lossy(), DEFAULT_CONNECTION_TIMEOUT)
            .expect("create pool");
        let mut pooled = pool.get().expect("get connection");
        let conn: &mut SqliteConnection = &mut pooled;
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");
        drop(pooled);
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::from_pool(self.pool.clone())
    }
}

pub fn new_company(
    name: &str,
    industry: &str,
    location: &str,
    size: CompanySize,
    company_type: CompanyType,
) -> NewCompany {
    NewCompany::new(
        CompanyName::new(name).unwrap(),
        IndustryName::new(industry).unwrap(),
        LocationName::new(location).unwrap(),
        size,
        company_type,
    )
}

/// Inserts a varied set of companies and returns them in insertion order.
pub fn seed_companies(repo: &DieselRepository) -> Vec<Company> {
    let rows = [
        ("Acme", "Technology", "Austin, TX", CompanySize::Micro, CompanyType::Private),
        ("Apple", "Technology", "Cupertino, CA", CompanySize::Enterprise, CompanyType::Public),
        ("Globex", "Finance", "Seattle, WA", CompanySize::Medium, CompanyType::Private),
        ("Initech", "Technology", "Austin, TX", CompanySize::Small, CompanyType::Private),
        ("Red Cross", "Healthcare", "Redmond, WA", CompanySize::Large, CompanyType::NonProfit),
        ("City Schools", "Education", "Austin, TX", CompanySize::Large, CompanyType::Government),
        ("acme labs", "Technology", "San Francisco, CA", CompanySize::Micro, CompanyType::Private),
        ("Umbrella", "Healthcare", "Menlo Park, CA", CompanySize::Enterprise, CompanyType::Public),
    ];

    rows.into_iter()
        .map(|(name, industry, location, size, company_type)| {
            repo.create_company(&new_company(name, industry, location, size, company_type))
                .expect("insert company")
        })
        .collect()
}
