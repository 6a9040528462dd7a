use crate::domain::advocate::{Advocate, SortDirection, SortField};
use crate::dto::api::{AdvocatesQuery, AdvocatesResponse};

/// Page size the client always requests, regardless of the server default.
pub const ITEMS_PER_PAGE: usize = 10;

/// The client-resident mirror of the last-submitted query and its outcome.
///
/// Mutated only through the setters below and through
/// [`apply_success`](SearchState::apply_success) /
/// [`apply_failure`](SearchState::apply_failure); a superseded attempt never
/// reaches either.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub advocates: Vec<Advocate>,
    pub search_term: String,
    pub selected_degrees: Vec<String>,
    pub selected_specialties: Vec<String>,
    pub current_page: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loading: bool,
    pub error: Option<String>,
    pub sort_field: Option<SortField>,
    pub sort_direction: SortDirection,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            advocates: Vec::new(),
            search_term: String::new(),
            selected_degrees: Vec::new(),
            selected_specialties: Vec::new(),
            current_page: 1,
            total_count: 0,
            total_pages: 0,
            is_loading: false,
            error: None,
            sort_field: None,
            sort_direction: SortDirection::Asc,
        }
    }
}

impl SearchState {
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_selected_degrees(&mut self, degrees: Vec<String>) {
        self.selected_degrees = degrees;
    }

    pub fn set_selected_specialties(&mut self, specialties: Vec<String>) {
        self.selected_specialties = specialties;
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn set_sorting(&mut self, field: Option<SortField>, direction: SortDirection) {
        self.sort_field = field;
        self.sort_direction = direction;
    }

    /// Clears the free-text term, keeping filters and sort.
    pub fn reset_search(&mut self) {
        self.search_term.clear();
        self.current_page = 1;
    }

    /// Returns the search to its pristine parameters, keeping the last
    /// result until the follow-up fetch replaces it.
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.selected_degrees.clear();
        self.selected_specialties.clear();
        self.current_page = 1;
    }

    /// Marks a new attempt as pending.
    pub fn begin_attempt(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn apply_success(&mut self, response: AdvocatesResponse) {
        self.advocates = response.data;
        self.total_count = response.pagination.total;
        self.total_pages = response.pagination.total_pages;
        self.error = None;
        self.is_loading = false;
    }

    /// Failure leaves the UI in a defined empty-result state.
    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.advocates = Vec::new();
        self.total_count = 0;
        self.total_pages = 0;
        self.is_loading = false;
    }

    /// Serializes the current parameters into one query request.
    pub fn to_query(&self) -> AdvocatesQuery {
        AdvocatesQuery {
            page: self.current_page,
            limit: ITEMS_PER_PAGE,
            search: self.search_term.clone(),
            degrees: self.selected_degrees.clone(),
            specialties: self.selected_specialties.clone(),
            sort_field: self.sort_field,
            sort_direction: self.sort_direction,
        }
    }
}
