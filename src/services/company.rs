use crate::domain::company::{Company, NewCompany};
use crate::dto::api::{CompaniesQuery, CompanyListResponse};
use crate::forms::company::AddCompanyForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Pagination, PaginationSummary};
use crate::repository::{CompanyListQuery, CompanyReader, CompanySort, CompanyWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of companies matching every supplied filter.
pub fn list_companies<R>(repo: &R, params: CompaniesQuery) -> ServiceResult<CompanyListResponse>
where
    R: CompanyReader + ?Sized,
{
    let pagination = Pagination::new(params.page.unwrap_or(1), DEFAULT_ITEMS_PER_PAGE);

    let sort = params
        .sort
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(CompanySort::from_key)
        .unwrap_or_default();

    let mut query = CompanyListQuery::new()
        .sort(sort)
        .paginate(pagination.page, pagination.per_page);

    if let Some(search) = params.search {
        query = query.search(search);
    }
    if let Some(industry) = params.industry {
        query = query.industry(industry);
    }
    if let Some(location) = params.location {
        query = query.location(location);
    }
    if let Some(size) = params.size {
        query = query.size(size);
    }
    if let Some(company_type) = params.company_type {
        query = query.company_type(company_type);
    }

    let (total, companies) = repo.list_companies(query).map_err(|err| {
        log::error!("Failed to list companies: {err}");
        ServiceError::from(err)
    })?;

    Ok(CompanyListResponse {
        companies,
        pagination: PaginationSummary::new(pagination, total),
    })
}

/// Validates the submitted payload and stores it as a new company.
pub fn create_company<R>(repo: &R, form: AddCompanyForm) -> ServiceResult<Company>
where
    R: CompanyWriter + ?Sized,
{
    let new_company = NewCompany::try_from(form).map_err(|err| {
        log::warn!("Rejected company payload: {err}");
        ServiceError::from(err)
    })?;

    let company = repo.create_company(&new_company).map_err(|err| {
        log::error!("Failed to create company: {err}");
        ServiceError::from(err)
    })?;

    log::info!("Created company {} ({})", company.id, company.name);

    Ok(company)
}
