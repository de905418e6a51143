//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::company::{Company, NewCompany};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CompanyListQuery, CompanyReader, CompanyWriter};

mock! {
    pub Repository {}

    impl CompanyReader for Repository {
        fn list_companies(&self, query: CompanyListQuery) -> RepositoryResult<(usize, Vec<Company>)>;
    }

    impl CompanyWriter for Repository {
        fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company>;
    }
}
