use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One advocate record as surfaced over the API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    /// Categorical degree, open string domain (e.g. "MD", "PhD", "MSW").
    pub degree: String,
    /// Unordered specialty tags; duplicates are allowed on the record itself.
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: Option<String>,
}

impl NewAdvocate {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        city: String,
        degree: String,
        specialties: Vec<String>,
        years_of_experience: i32,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            city: city.trim().to_string(),
            degree: degree.trim().to_string(),
            specialties,
            years_of_experience: years_of_experience.max(0),
            phone_number: phone_number
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Distinct filter choices currently present in the record store.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FilterOptions {
    /// Distinct degree values, sorted ascending.
    pub degrees: Vec<String>,
    /// Deduplicated union of all specialty tags, sorted ascending.
    pub specialties: Vec<String>,
}

/// Column a listing can be sorted by.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Degree,
    City,
    Experience,
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "degree" => Ok(SortField::Degree),
            "city" => Ok(SortField::City),
            "experience" => Ok(SortField::Experience),
            _ => Err(()),
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortField::Name => "name",
            SortField::Degree => "degree",
            SortField::City => "city",
            SortField::Experience => "experience",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_advocate_normalizes_fields() {
        let advocate = NewAdvocate::new(
            "  Jane ".to_string(),
            "Doe".to_string(),
            " Boston ".to_string(),
            "MD ".to_string(),
            vec!["Trauma & PTSD".to_string()],
            -3,
            Some("   ".to_string()),
        );
        assert_eq!(advocate.first_name, "Jane");
        assert_eq!(advocate.city, "Boston");
        assert_eq!(advocate.degree, "MD");
        assert_eq!(advocate.years_of_experience, 0);
        assert_eq!(advocate.phone_number, None);
    }

    #[test]
    fn sort_field_round_trips_through_str() {
        for field in [
            SortField::Name,
            SortField::Degree,
            SortField::City,
            SortField::Experience,
        ] {
            assert_eq!(field.to_string().parse::<SortField>(), Ok(field));
        }
        assert!("experiences".parse::<SortField>().is_err());
        assert!("".parse::<SortField>().is_err());
    }

    #[test]
    fn sort_direction_defaults_to_ascending() {
        assert_eq!(SortDirection::default(), SortDirection::Asc);
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("descending".parse::<SortDirection>().is_err());
    }
}
