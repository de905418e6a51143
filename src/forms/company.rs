use serde::Deserialize;
use validator::Validate;

use crate::domain::company::NewCompany;
use crate::domain::types::{
    CompanyDescription, CompanyName, CompanySize, CompanyType, CompanyUrl, IndustryName,
    LocationName,
};
use crate::forms::FormError;

/// Founding year as submitted: either a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FoundedInput {
    Year(i32),
    Text(String),
}

impl FoundedInput {
    /// Blank text means no year was given.
    fn into_year(self) -> Result<Option<i32>, FormError> {
        match self {
            FoundedInput::Year(year) => Ok(Some(year)),
            FoundedInput::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }
                text.parse()
                    .map(Some)
                    .map_err(|_| FormError::InvalidFounded(text.to_string()))
            }
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload submitted to create a company.
///
/// Required fields default to empty strings when missing so that an absent
/// field is reported as a validation failure rather than a parse failure.
pub struct AddCompanyForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "industry is required"))]
    pub industry: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "size is required"))]
    pub size: String,
    #[serde(default, rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    pub company_type: String,
    #[serde(default)]
    pub founded: Option<FoundedInput>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Treats missing and whitespace-only optional inputs the same way.
fn optional(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl TryFrom<AddCompanyForm> for NewCompany {
    type Error = FormError;

    fn try_from(form: AddCompanyForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = CompanyName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let industry = IndustryName::new(form.industry).map_err(|_| FormError::InvalidIndustry)?;
        let location = LocationName::new(form.location).map_err(|_| FormError::InvalidLocation)?;
        let size = form
            .size
            .parse::<CompanySize>()
            .map_err(|_| FormError::InvalidSize(form.size.trim().to_string()))?;
        let company_type = form
            .company_type
            .parse::<CompanyType>()
            .map_err(|_| FormError::InvalidCompanyType(form.company_type.trim().to_string()))?;

        let mut company = NewCompany::new(name, industry, location, size, company_type);

        if let Some(logo) = optional(form.logo) {
            let logo = CompanyUrl::new(logo).map_err(|_| FormError::InvalidLogoUrl)?;
            company = company.with_logo(logo);
        }
        if let Some(website) = optional(form.website) {
            let website = CompanyUrl::new(website).map_err(|_| FormError::InvalidWebsiteUrl)?;
            company = company.with_website(website);
        }
        let founded = form.founded.map(FoundedInput::into_year).transpose()?;
        if let Some(founded) = founded.flatten() {
            company = company.with_founded(founded);
        }
        if let Some(description) =
            optional(form.description).and_then(|d| CompanyDescription::new(d).ok())
        {
            company = company.with_description(description);
        }

        Ok(company)
    }
}
