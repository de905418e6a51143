use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{
    CompanyDescription, CompanyId, CompanyName, CompanySize, CompanyType, CompanyUrl,
    IndustryName, LocationName,
};

/// Company record as stored and returned by the directory.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: CompanyName,
    pub logo: Option<CompanyUrl>,
    pub industry: IndustryName,
    pub location: LocationName,
    pub size: CompanySize,
    #[serde(rename = "type")]
    pub company_type: CompanyType,
    pub founded: Option<i32>,
    pub website: Option<CompanyUrl>,
    pub description: Option<CompanyDescription>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated payload for a company that has not been stored yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCompany {
    pub name: CompanyName,
    pub logo: Option<CompanyUrl>,
    pub industry: IndustryName,
    pub location: LocationName,
    pub size: CompanySize,
    pub company_type: CompanyType,
    pub founded: Option<i32>,
    pub website: Option<CompanyUrl>,
    pub description: Option<CompanyDescription>,
}

impl NewCompany {
    /// Builds a company with only the required fields set.
    #[must_use]
    pub fn new(
        name: CompanyName,
        industry: IndustryName,
        location: LocationName,
        size: CompanySize,
        company_type: CompanyType,
    ) -> Self {
        Self {
            name,
            logo: None,
            industry,
            location,
            size,
            company_type,
            founded: None,
            website: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_logo(mut self, logo: CompanyUrl) -> Self {
        self.logo = Some(logo);
        self
    }

    #[must_use]
    pub fn with_website(mut self, website: CompanyUrl) -> Self {
        self.website = Some(website);
        self
    }

    #[must_use]
    pub fn with_founded(mut self, founded: i32) -> Self {
        self.founded = Some(founded);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: CompanyDescription) -> Self {
        self.description = Some(description);
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    #[test]
    fn company_serializes_with_wire_names() {
        let now = Utc::now().naive_utc();
        let company = Company {
            id: CompanyId::new(1).unwrap(),
            name: CompanyName::new("Acme").unwrap(),
            logo: None,
            industry: IndustryName::new("Technology").unwrap(),
            location: LocationName::new("Austin, TX").unwrap(),
            size: CompanySize::Micro,
            company_type: CompanyType::Private,
            founded: Some(1999),
            website: Some(CompanyUrl::new("https://acme.com").unwrap()),
            description: None,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&company).unwrap();

        assert_eq!(value["id"], json!(1));
        assert_eq!(value["name"], json!("Acme"));
        assert_eq!(value["size"], json!("1-10"));
        assert_eq!(value["type"], json!("Private"));
        assert_eq!(value["website"], json!("https://acme.com"));
        assert_eq!(value["logo"], json!(null));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("company_type").is_none());
    }
}
