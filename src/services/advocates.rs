use crate::dto::api::{AdvocatesQuery, AdvocatesResponse, FilterOptionsResponse, PaginationMeta};
use crate::repository::{AdvocateListQuery, AdvocateReader};
use crate::services::ServiceResult;

/// Runs one paginated listing against the store and assembles the response
/// envelope.
///
/// `page` and `limit` are clamped to at least 1; a blank search term adds no
/// clause; the sort direction only matters when a sort field was requested.
pub fn list_advocates<R>(repo: &R, params: AdvocatesQuery) -> ServiceResult<AdvocatesResponse>
where
    R: AdvocateReader + ?Sized,
{
    let page = params.page.max(1);
    let limit = params.limit.max(1);

    let mut query = AdvocateListQuery::new().paginate(page, limit);

    let search = params.search.trim();
    if !search.is_empty() {
        query = query.search(search);
    }
    if !params.degrees.is_empty() {
        query = query.degrees(params.degrees);
    }
    if !params.specialties.is_empty() {
        query = query.specialties(params.specialties);
    }
    if let Some(field) = params.sort_field {
        query = query.sort(field, params.sort_direction);
    }

    let (total, data) = repo.list_advocates(query)?;

    let offset = (page - 1) * limit;
    let pagination = PaginationMeta {
        page,
        limit,
        total,
        total_pages: total.div_ceil(limit),
        has_more: offset + data.len() < total,
    };

    Ok(AdvocatesResponse { data, pagination })
}

/// Returns the distinct degree and specialty values usable as filter
/// choices, freshly computed from the store.
pub fn filter_options<R>(repo: &R) -> ServiceResult<FilterOptionsResponse>
where
    R: AdvocateReader + ?Sized,
{
    let options = repo.filter_options()?;
    Ok(FilterOptionsResponse {
        degrees: options.degrees,
        specialties: options.specialties,
    })
}
