//! Populates the advocates database with sample records for local use.
//!
//! Assumes a migrated database (`diesel migration run`). The record count
//! comes from `SEED_COUNT`, defaulting to 100.

use std::env;

use config::Config;
use dotenvy::dotenv;
use rand::RngExt;
use rand::seq::IndexedRandom;

use advocate_directory::db::establish_connection_pool;
use advocate_directory::domain::advocate::NewAdvocate;
use advocate_directory::models::config::ServerConfig;
use advocate_directory::repository::AdvocateWriter;
use advocate_directory::repository::advocate::DieselAdvocateRepository;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alice", "Michael", "Emily", "Chris", "Jessica", "David", "Laura", "Daniel",
    "Sarah", "James", "Megan", "Joshua", "Amanda",
];

const LAST_NAMES: &[&str] = &[
    "Doe", "Smith", "Johnson", "Brown", "Davis", "Martinez", "Taylor", "Harris", "Clark", "Lewis",
    "Lee", "King", "Green", "Walker", "Hall",
];

const CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
];

const DEGREES: &[&str] = &["MD", "PhD", "MSW"];

const SPECIALTIES: &[&str] = &[
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "Suicide History/Attempts",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Men's issues",
    "Relationship Issues (family, friends, couple, etc)",
    "Trauma & PTSD",
    "Personality disorders",
    "Personal growth",
    "Substance use/abuse",
    "Pediatrics",
    "Women's issues (post-partum, infertility, family planning)",
    "Chronic pain",
    "Weight loss & nutrition",
    "Eating disorders",
    "Diabetic Diet and nutrition",
    "Coaching (leadership, career, academic and wellness)",
    "Life coaching",
    "Obsessive-compulsive disorders",
    "Neuropsychological evaluations & testing (ADHD testing)",
    "Attention and Hyperactivity (ADHD)",
    "Sleep issues",
    "Schizophrenia and psychotic disorders",
    "Learning disorders",
    "Domestic abuse",
];

fn sample_advocates(count: usize) -> Vec<NewAdvocate> {
    let mut rng = rand::rng();

    (0..count)
        .map(|_| {
            let tag_count = rng.random_range(1..=3);
            let specialties = SPECIALTIES
                .choose_multiple(&mut rng, tag_count)
                .map(|s| s.to_string())
                .collect();

            NewAdvocate::new(
                FIRST_NAMES.choose(&mut rng).unwrap_or(&"Jane").to_string(),
                LAST_NAMES.choose(&mut rng).unwrap_or(&"Doe").to_string(),
                CITIES.choose(&mut rng).unwrap_or(&"New York").to_string(),
                DEGREES.choose(&mut rng).unwrap_or(&"MD").to_string(),
                specialties,
                rng.random_range(1..40),
                Some(format!("555{:07}", rng.random_range(0..10_000_000))),
            )
        })
        .collect()
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let count = env::var("SEED_COUNT")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(100);

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselAdvocateRepository::new(&pool);
    let advocates = sample_advocates(count);

    match repo.create_advocates(&advocates) {
        Ok(inserted) => log::info!("Seeded {inserted} advocates into {}", server_config.database_url),
        Err(e) => {
            log::error!("Failed to seed advocates: {e}");
            std::process::exit(1);
        }
    }
}
