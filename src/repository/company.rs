//! Repository implementation for company records.

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    db::unicode_lower,
    domain::company::{Company, NewCompany},
    models::company::{Company as DbCompany, NewCompany as DbNewCompany},
    repository::{
        CompanyListQuery, CompanyReader, CompanySort, CompanyWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::companies,
};

/// Escapes LIKE wildcards so the term matches literally as a substring.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Applies every filter present in `query`, AND-ed together.
fn filtered(query: &CompanyListQuery) -> companies::BoxedQuery<'_, Sqlite> {
    let mut items = companies::table.into_boxed();

    if let Some(term) = &query.search {
        items = items.filter(
            unicode_lower(companies::name)
                .like(like_pattern(&term.to_lowercase()))
                .escape('\\'),
        );
    }
    if let Some(industry) = &query.industry {
        items = items.filter(companies::industry.eq(industry));
    }
    if let Some(location) = &query.location {
        items = items.filter(companies::location.eq(location));
    }
    if let Some(size) = &query.size {
        items = items.filter(companies::size.eq(size));
    }
    if let Some(company_type) = &query.company_type {
        items = items.filter(companies::company_type.eq(company_type));
    }

    items
}

fn into_domain(company: DbCompany) -> RepositoryResult<Company> {
    let id = company.id;
    Company::try_from(company).map_err(|e| {
        RepositoryError::DatabaseError(format!("Invalid stored company {id}: {e}"))
    })
}

impl CompanyReader for DieselRepository {
    fn list_companies(&self, query: CompanyListQuery) -> RepositoryResult<(usize, Vec<Company>)> {
        let mut conn = self.conn()?;

        let total: i64 = filtered(&query).count().get_result(&mut conn)?;

        let mut items = match query.sort {
            CompanySort::Name => {
                filtered(&query).order((companies::name.asc(), companies::id.asc()))
            }
            CompanySort::CreatedAt => {
                filtered(&query).order((companies::created_at.desc(), companies::id.desc()))
            }
        };

        if let Some(pagination) = query.pagination {
            items = items
                .limit(i64::try_from(pagination.per_page).unwrap_or(i64::MAX))
                .offset(i64::try_from(pagination.offset()).unwrap_or(i64::MAX));
        }

        let companies = items
            .load::<DbCompany>(&mut conn)?
            .into_iter()
            .map(into_domain)
            .collect::<RepositoryResult<Vec<Company>>>()?;

        Ok((total as usize, companies))
    }
}

impl CompanyWriter for DieselRepository {
    fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company> {
        let mut conn = self.conn()?;

        let now = Utc::now().naive_utc();
        let insertable = DbNewCompany::from_domain(new_company, now);

        let created = diesel::insert_into(companies::table)
            .values(&insertable)
            .get_result::<DbCompany>(&mut conn)?;

        into_domain(created)
    }
}
