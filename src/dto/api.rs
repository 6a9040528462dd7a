use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::advocate::{Advocate, SortDirection, SortField};

/// Page size applied when the caller does not send `limit`.
pub const DEFAULT_PAGE_SIZE: usize = 100;

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    DEFAULT_PAGE_SIZE
}

/// An unrecognized `sortField` value means "no sort requested", it is not a
/// client error.
fn lenient_sort_field<'de, D>(deserializer: D) -> Result<Option<SortField>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse().ok()))
}

/// Anything but a recognized direction falls back to ascending.
fn lenient_sort_direction<'de, D>(deserializer: D) -> Result<SortDirection, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| value.parse().ok())
        .unwrap_or_default())
}

/// Query parameters accepted by `GET /api/advocates`.
///
/// `degrees` and `specialties` arrive as repeated keys
/// (`degrees=MD&degrees=PhD`), which is why this deserializes through
/// `serde_html_form` rather than the default Actix query extractor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvocatesQuery {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degrees: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specialties: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_sort_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub sort_field: Option<SortField>,
    #[serde(default, deserialize_with = "lenient_sort_direction")]
    pub sort_direction: SortDirection,
}

impl Default for AdvocatesQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            search: String::new(),
            degrees: Vec::new(),
            specialties: Vec::new(),
            sort_field: None,
            sort_direction: SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_more: bool,
}

/// Response envelope for `GET /api/advocates`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvocatesResponse {
    pub data: Vec<Advocate>,
    pub pagination: PaginationMeta,
}

/// Response body for `GET /api/advocates/filters`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FilterOptionsResponse {
    pub degrees: Vec<String>,
    pub specialties: Vec<String>,
}

/// Opaque error body; the underlying failure is only logged server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_repeated_filter_params() {
        let query: AdvocatesQuery = serde_html_form::from_str(
            "page=2&limit=10&search=jane&degrees=MD&degrees=PhD&specialties=Bipolar&sortField=experience&sortDirection=desc",
        )
        .unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 10);
        assert_eq!(query.search, "jane");
        assert_eq!(query.degrees, vec!["MD".to_string(), "PhD".to_string()]);
        assert_eq!(query.specialties, vec!["Bipolar".to_string()]);
        assert_eq!(query.sort_field, Some(SortField::Experience));
        assert_eq!(query.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn empty_query_string_yields_defaults() {
        let query: AdvocatesQuery = serde_html_form::from_str("").unwrap();
        assert_eq!(query, AdvocatesQuery::default());
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn unknown_sort_values_fall_back() {
        let query: AdvocatesQuery =
            serde_html_form::from_str("sortField=shoe_size&sortDirection=sideways").unwrap();
        assert_eq!(query.sort_field, None);
        assert_eq!(query.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn serializes_only_populated_params() {
        let query = AdvocatesQuery {
            page: 1,
            limit: 10,
            ..AdvocatesQuery::default()
        };
        let encoded = serde_html_form::to_string(&query).unwrap();
        assert_eq!(encoded, "page=1&limit=10&sortDirection=asc");

        let query = AdvocatesQuery {
            search: "anxiety".to_string(),
            degrees: vec!["MD".to_string(), "MSW".to_string()],
            sort_field: Some(SortField::City),
            ..AdvocatesQuery::default()
        };
        let encoded = serde_html_form::to_string(&query).unwrap();
        assert!(encoded.contains("degrees=MD&degrees=MSW"));
        assert!(encoded.contains("sortField=city"));
        assert!(encoded.contains("search=anxiety"));
    }
}
