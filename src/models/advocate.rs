use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::advocate::{Advocate as DomainAdvocate, NewAdvocate as DomainNewAdvocate};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::advocates)]
/// Diesel model for [`crate::domain::advocate::Advocate`].
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Serialized JSON array of specialty tags.
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::advocates)]
/// Insertable form of [`Advocate`].
pub struct NewAdvocate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub city: &'a str,
    pub degree: &'a str,
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: Option<&'a str>,
}

/// Parses a stored specialties column into its string tags.
///
/// Entries that are not JSON strings are dropped; a malformed column reads
/// as an empty tag list rather than an error.
pub(crate) fn parse_specialties(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<serde_json::Value>>(raw)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

impl From<Advocate> for DomainAdvocate {
    fn from(advocate: Advocate) -> Self {
        let specialties = parse_specialties(&advocate.specialties);
        Self {
            id: advocate.id,
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            specialties,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
            created_at: advocate.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewAdvocate> for NewAdvocate<'a> {
    fn from(advocate: &'a DomainNewAdvocate) -> Self {
        Self {
            first_name: advocate.first_name.as_str(),
            last_name: advocate.last_name.as_str(),
            city: advocate.city.as_str(),
            degree: advocate.degree.as_str(),
            specialties: serde_json::to_string(&advocate.specialties)
                .unwrap_or_else(|_| "[]".to_string()),
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn parse_specialties_keeps_strings_only() {
        let tags = parse_specialties(r#"["Bipolar", 42, null, "Sleep issues", {"x": 1}]"#);
        assert_eq!(tags, vec!["Bipolar".to_string(), "Sleep issues".to_string()]);
    }

    #[test]
    fn parse_specialties_tolerates_garbage() {
        assert!(parse_specialties("not json").is_empty());
        assert!(parse_specialties("{}").is_empty());
        assert!(parse_specialties("").is_empty());
    }

    #[test]
    fn advocate_into_domain() {
        let now = Utc::now().naive_utc();
        let db_advocate = Advocate {
            id: 7,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            city: "Boston".to_string(),
            degree: "MD".to_string(),
            specialties: r#"["Trauma & PTSD"]"#.to_string(),
            years_of_experience: 12,
            phone_number: Some("5551234567".to_string()),
            created_at: now,
        };
        let domain: DomainAdvocate = db_advocate.into();
        assert_eq!(domain.id, 7);
        assert_eq!(domain.specialties, vec!["Trauma & PTSD".to_string()]);
        assert_eq!(domain.created_at, now);
    }

    #[test]
    fn from_domain_new_serializes_specialties() {
        let domain = DomainNewAdvocate::new(
            "John".to_string(),
            "Smith".to_string(),
            "Denver".to_string(),
            "PhD".to_string(),
            vec!["LGBTQ".to_string(), "Men's issues".to_string()],
            4,
            None,
        );
        let new: NewAdvocate = (&domain).into();
        assert_eq!(new.specialties, r#"["LGBTQ","Men's issues"]"#);
        assert_eq!(new.phone_number, None);
    }
}
