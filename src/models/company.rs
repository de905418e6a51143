use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::company::{Company as DomainCompany, NewCompany as DomainNewCompany};
use crate::domain::types::{
    CompanyDescription, CompanyId, CompanyName, CompanySize, CompanyType, CompanyUrl,
    IndustryName, LocationName, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::companies)]
/// Diesel model for [`crate::domain::company::Company`].
pub struct Company {
    pub id: i32,
    pub name: String,
    pub logo: Option<String>,
    pub industry: String,
    pub location: String,
    pub size: String,
    pub company_type: String,
    pub founded: Option<i32>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::companies)]
/// Insertable form of [`Company`].
pub struct NewCompany<'a> {
    pub name: &'a str,
    pub logo: Option<&'a str>,
    pub industry: &'a str,
    pub location: &'a str,
    pub size: &'a str,
    pub company_type: &'a str,
    pub founded: Option<i32>,
    pub website: Option<&'a str>,
    pub description: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Company> for DomainCompany {
    type Error = TypeConstraintError;

    fn try_from(company: Company) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CompanyId::new(company.id)?,
            name: CompanyName::new(company.name)?,
            logo: company.logo.map(CompanyUrl::new).transpose()?,
            industry: IndustryName::new(company.industry)?,
            location: LocationName::new(company.location)?,
            size: company.size.parse::<CompanySize>()?,
            company_type: company.company_type.parse::<CompanyType>()?,
            founded: company.founded,
            website: company.website.map(CompanyUrl::new).transpose()?,
            description: company
                .description
                .map(CompanyDescription::new)
                .transpose()?,
            created_at: company.created_at,
            updated_at: company.updated_at,
        })
    }
}

impl<'a> NewCompany<'a> {
    /// Borrows the domain payload, stamping both timestamps with `now`.
    pub fn from_domain(company: &'a DomainNewCompany, now: NaiveDateTime) -> Self {
        Self {
            name: company.name.as_str(),
            logo: company.logo.as_ref().map(CompanyUrl::as_str),
            industry: company.industry.as_str(),
            location: company.location.as_str(),
            size: company.size.as_str(),
            company_type: company.company_type.as_str(),
            founded: company.founded,
            website: company.website.as_ref().map(CompanyUrl::as_str),
            description: company.description.as_ref().map(CompanyDescription::as_str),
            created_at: now,
            updated_at: now,
        }
    }
}
