//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::advocate::{Advocate, FilterOptions, NewAdvocate};
use crate::repository::{
    AdvocateListQuery, AdvocateReader, AdvocateWriter, errors::RepositoryResult,
};

mock! {
    pub Repository {}

    impl AdvocateReader for Repository {
        fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)>;
        fn filter_options(&self) -> RepositoryResult<FilterOptions>;
    }

    impl AdvocateWriter for Repository {
        fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize>;
    }
}
