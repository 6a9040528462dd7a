#![allow(dead_code)]

use advocate_directory::db::{DbPool, establish_connection_pool};
use advocate_directory::domain::advocate::NewAdvocate;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A migrated SQLite database in a temp directory, removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let database_url = dir.path().join(name).to_string_lossy().to_string();

        let pool = establish_connection_pool(&database_url).expect("failed to build pool");
        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

pub fn advocate(
    first_name: &str,
    last_name: &str,
    city: &str,
    degree: &str,
    specialties: &[&str],
    years_of_experience: i32,
) -> NewAdvocate {
    NewAdvocate::new(
        first_name.to_string(),
        last_name.to_string(),
        city.to_string(),
        degree.to_string(),
        specialties.iter().map(|s| s.to_string()).collect(),
        years_of_experience,
        None,
    )
}

/// Six advocates covering every filter dimension the tests exercise.
pub fn sample_directory() -> Vec<NewAdvocate> {
    vec![
        advocate(
            "Jane",
            "Doe",
            "New York",
            "MD",
            &["Trauma & PTSD", "Sleep issues"],
            12,
        ),
        advocate("John", "Smith", "Boston", "PhD", &["Bipolar"], 5),
        advocate("Alice", "Adams", "Chicago", "MSW", &["LGBTQ", "Bipolar"], 8),
        advocate("Bob", "Brown", "Denver", "MD", &["Sleep issues"], 20),
        advocate("Carol", "Doe", "Austin", "PhD", &["Life coaching"], 8),
        advocate("Eve", "Evans", "Seattle", "MD", &["Chronic pain"], 3),
    ]
}
