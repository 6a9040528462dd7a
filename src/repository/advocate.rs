use std::collections::BTreeSet;

use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel::sqlite::Sqlite;

use crate::{
    db::DbPool,
    domain::advocate::{Advocate, FilterOptions, NewAdvocate, SortDirection, SortField},
    models::advocate::parse_specialties,
    repository::{AdvocateListQuery, AdvocateReader, AdvocateWriter, errors::RepositoryResult},
    schema::advocates,
};

/// Diesel implementation of [`AdvocateReader`] and [`AdvocateWriter`].
pub struct DieselAdvocateRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselAdvocateRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

/// LIKE pattern matching one JSON-encoded tag inside the serialized
/// specialties array, quotes included, so "Pain" cannot match "Chronic pain".
fn specialty_pattern(value: &str) -> String {
    let quoted = serde_json::to_string(value).unwrap_or_default();
    format!("%{quoted}%")
}

/// Folds the optional clauses of `query` into one boxed predicate.
///
/// Clauses are ANDed; each is present only when its trigger holds:
/// a non-empty search term, a non-empty degree selection, a non-empty
/// specialty selection. With no clause the predicate matches every record.
fn filtered(query: &AdvocateListQuery) -> advocates::BoxedQuery<'static, Sqlite> {
    let mut filtered = advocates::table.into_boxed();

    if let Some(term) = &query.search {
        // SQLite LIKE compares ASCII case-insensitively, covering the
        // case-insensitive substring contract for this store.
        let pattern = format!("%{term}%");
        filtered = filtered.filter(
            advocates::first_name
                .like(pattern.clone())
                .or(advocates::last_name.like(pattern.clone()))
                .or(advocates::city.like(pattern.clone()))
                .or(advocates::degree.like(pattern.clone()))
                .or(advocates::specialties.like(pattern)),
        );
    }

    if !query.degrees.is_empty() {
        filtered = filtered.filter(advocates::degree.eq_any(query.degrees.clone()));
    }

    if let Some((first, rest)) = query.specialties.split_first() {
        let mut any_selected: Box<dyn BoxableExpression<advocates::table, Sqlite, SqlType = Bool>> =
            Box::new(advocates::specialties.like(specialty_pattern(first)));
        for value in rest {
            any_selected =
                Box::new(any_selected.or(advocates::specialties.like(specialty_pattern(value))));
        }
        filtered = filtered.filter(any_selected);
    }

    filtered
}

/// Applies the fully-determined ordering for `sort`.
///
/// The requested direction applies to the primary key only; every non-name
/// sort appends (last_name, first_name) ascending as tiebreakers, and the
/// default order is that pair itself.
fn ordered(
    query: advocates::BoxedQuery<'static, Sqlite>,
    sort: Option<(SortField, SortDirection)>,
) -> advocates::BoxedQuery<'static, Sqlite> {
    let Some((field, direction)) = sort else {
        return query
            .order(advocates::last_name.asc())
            .then_order_by(advocates::first_name.asc());
    };

    let primary = match (field, direction) {
        (SortField::Name, SortDirection::Asc) => query
            .order(advocates::last_name.asc())
            .then_order_by(advocates::first_name.asc()),
        (SortField::Name, SortDirection::Desc) => query
            .order(advocates::last_name.desc())
            .then_order_by(advocates::first_name.desc()),
        (SortField::Degree, SortDirection::Asc) => query.order(advocates::degree.asc()),
        (SortField::Degree, SortDirection::Desc) => query.order(advocates::degree.desc()),
        (SortField::City, SortDirection::Asc) => query.order(advocates::city.asc()),
        (SortField::City, SortDirection::Desc) => query.order(advocates::city.desc()),
        (SortField::Experience, SortDirection::Asc) => {
            query.order(advocates::years_of_experience.asc())
        }
        (SortField::Experience, SortDirection::Desc) => {
            query.order(advocates::years_of_experience.desc())
        }
    };

    match field {
        SortField::Name => primary,
        _ => primary
            .then_order_by(advocates::last_name.asc())
            .then_order_by(advocates::first_name.asc()),
    }
}

impl AdvocateReader for DieselAdvocateRepository<'_> {
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)> {
        use crate::models::advocate::Advocate as DbAdvocate;

        let mut conn = self.pool.get()?;

        let total: i64 = filtered(&query).count().get_result(&mut conn)?;

        let mut page_query = ordered(filtered(&query), query.sort);
        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            page_query = page_query.limit(per_page).offset((page - 1) * per_page);
        }

        let items = page_query
            .load::<DbAdvocate>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Advocate>>();

        Ok((total as usize, items))
    }

    fn filter_options(&self) -> RepositoryResult<FilterOptions> {
        let mut conn = self.pool.get()?;

        let degrees = advocates::table
            .select(advocates::degree)
            .distinct()
            .order(advocates::degree.asc())
            .load::<String>(&mut conn)?;

        let stored = advocates::table
            .select(advocates::specialties)
            .load::<String>(&mut conn)?;

        let mut tags = BTreeSet::new();
        for entry in stored {
            tags.extend(parse_specialties(&entry));
        }

        Ok(FilterOptions {
            degrees,
            specialties: tags.into_iter().collect(),
        })
    }
}

impl AdvocateWriter for DieselAdvocateRepository<'_> {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize> {
        use crate::models::advocate::NewAdvocate as DbNewAdvocate;

        let mut conn = self.pool.get()?;
        let insertables: Vec<DbNewAdvocate> = new_advocates.iter().map(Into::into).collect();
        let affected = diesel::insert_into(advocates::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specialty_pattern_quotes_the_tag() {
        assert_eq!(specialty_pattern("Bipolar"), "%\"Bipolar\"%");
        assert_eq!(
            specialty_pattern("Coaching \"light\""),
            "%\"Coaching \\\"light\\\"\"%"
        );
    }
}
