use actix_web::{App, http::StatusCode, test, web};

use advocate_directory::dto::api::{AdvocatesResponse, ErrorResponse, FilterOptionsResponse};
use advocate_directory::repository::AdvocateWriter;
use advocate_directory::repository::advocate::DieselAdvocateRepository;
use advocate_directory::routes::api::{api_advocate_filters, api_advocates};

mod common;

macro_rules! init_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool.clone()))
                .service(
                    web::scope("/api")
                        .service(api_advocates)
                        .service(api_advocate_filters),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn search_for_a_unique_record_returns_a_single_page() {
    let test_db = common::TestDb::new("routes_search_jane.db");
    let repo = DieselAdvocateRepository::new(test_db.pool());
    repo.create_advocates(&[
        common::advocate("Jane", "Doe", "New York", "MD", &["Bipolar"], 12),
        common::advocate("John", "Smith", "Boston", "PhD", &["LGBTQ"], 5),
        common::advocate("Alice", "Adams", "Chicago", "MSW", &["Pediatrics"], 8),
    ])
    .unwrap();
    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get()
        .uri("/api/advocates?search=Jane&limit=10&page=1")
        .to_request();
    let response: AdvocatesResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].first_name, "Jane");
    assert_eq!(response.pagination.total, 1);
    assert_eq!(response.pagination.total_pages, 1);
    assert!(!response.pagination.has_more);
}

#[actix_web::test]
async fn listing_defaults_to_name_order_with_full_count() {
    let test_db = common::TestDb::new("routes_default_order.db");
    let repo = DieselAdvocateRepository::new(test_db.pool());
    repo.create_advocates(&common::sample_directory()).unwrap();
    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get().uri("/api/advocates").to_request();
    let response: AdvocatesResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.pagination.total, 6);
    assert_eq!(response.pagination.page, 1);
    assert_eq!(response.pagination.limit, 100);
    let last_names: Vec<&str> = response.data.iter().map(|a| a.last_name.as_str()).collect();
    assert_eq!(
        last_names,
        vec!["Adams", "Brown", "Doe", "Doe", "Evans", "Smith"]
    );
}

#[actix_web::test]
async fn repeated_degree_params_filter_by_membership() {
    let test_db = common::TestDb::new("routes_degrees.db");
    let repo = DieselAdvocateRepository::new(test_db.pool());
    repo.create_advocates(&common::sample_directory()).unwrap();
    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get()
        .uri("/api/advocates?degrees=MD&degrees=PhD")
        .to_request();
    let response: AdvocatesResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.pagination.total, 5);
    assert!(
        response
            .data
            .iter()
            .all(|a| a.degree == "MD" || a.degree == "PhD")
    );
}

#[actix_web::test]
async fn sorting_by_experience_desc_over_the_wire() {
    let test_db = common::TestDb::new("routes_sort.db");
    let repo = DieselAdvocateRepository::new(test_db.pool());
    repo.create_advocates(&common::sample_directory()).unwrap();
    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get()
        .uri("/api/advocates?sortField=experience&sortDirection=desc")
        .to_request();
    let response: AdvocatesResponse = test::call_and_read_body_json(&app, req).await;

    let years: Vec<i32> = response
        .data
        .iter()
        .map(|a| a.years_of_experience)
        .collect();
    let mut sorted = years.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(years, sorted);
}

#[actix_web::test]
async fn out_of_range_page_is_empty_with_no_more() {
    let test_db = common::TestDb::new("routes_out_of_range.db");
    let repo = DieselAdvocateRepository::new(test_db.pool());
    repo.create_advocates(&common::sample_directory()).unwrap();
    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get()
        .uri("/api/advocates?page=5&limit=10")
        .to_request();
    let response: AdvocatesResponse = test::call_and_read_body_json(&app, req).await;

    assert!(response.data.is_empty());
    assert_eq!(response.pagination.total, 6);
    assert_eq!(response.pagination.total_pages, 1);
    assert!(!response.pagination.has_more);
}

#[actix_web::test]
async fn malformed_query_parameters_are_a_client_error() {
    let test_db = common::TestDb::new("routes_bad_params.db");
    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get()
        .uri("/api/advocates?limit=ten")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Invalid query parameters");
}

#[actix_web::test]
async fn filters_endpoint_lists_distinct_sorted_options() {
    let test_db = common::TestDb::new("routes_filters.db");
    let repo = DieselAdvocateRepository::new(test_db.pool());
    repo.create_advocates(&common::sample_directory()).unwrap();
    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get()
        .uri("/api/advocates/filters")
        .to_request();
    let response: FilterOptionsResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.degrees, vec!["MD", "MSW", "PhD"]);
    let mut sorted = response.specialties.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(response.specialties, sorted);
    assert!(response.specialties.contains(&"Bipolar".to_string()));
}

#[actix_web::test]
async fn empty_store_pages_cleanly() {
    let test_db = common::TestDb::new("routes_empty.db");
    let app = init_app!(test_db.pool());

    let req = test::TestRequest::get()
        .uri("/api/advocates?limit=10")
        .to_request();
    let response: AdvocatesResponse = test::call_and_read_body_json(&app, req).await;

    assert!(response.data.is_empty());
    assert_eq!(response.pagination.total, 0);
    assert_eq!(response.pagination.total_pages, 0);
    assert!(!response.pagination.has_more);
}
