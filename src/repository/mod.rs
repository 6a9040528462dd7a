use crate::{
    domain::advocate::{Advocate, FilterOptions, NewAdvocate, SortDirection, SortField},
    repository::errors::RepositoryResult,
};

pub mod advocate;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filter, sort and pagination parameters for one advocate listing.
///
/// Every clause is optional; an empty query matches the whole store in the
/// default (last name, first name) order.
#[derive(Debug, Clone, Default)]
pub struct AdvocateListQuery {
    pub search: Option<String>,
    pub degrees: Vec<String>,
    pub specialties: Vec<String>,
    pub sort: Option<(SortField, SortDirection)>,
    pub pagination: Option<Pagination>,
}

impl AdvocateListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn degrees(mut self, degrees: Vec<String>) -> Self {
        self.degrees = degrees;
        self
    }

    pub fn specialties(mut self, specialties: Vec<String>) -> Self {
        self.specialties = specialties;
        self
    }

    pub fn sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort = Some((field, direction));
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait AdvocateReader {
    /// Returns the total number of matching records together with the
    /// requested page slice. The pair comes from one repository call so a
    /// store failure can never yield a count without data or vice versa.
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)>;

    /// Distinct degree values and the deduplicated union of specialty tags.
    fn filter_options(&self) -> RepositoryResult<FilterOptions>;
}

pub trait AdvocateWriter {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize>;
}
