use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::error;

use crate::db::DbPool;
use crate::dto::api::AdvocatesQuery;
use crate::repository::advocate::DieselAdvocateRepository;
use crate::routes::{bad_request, internal_error};
use crate::services::advocates as advocate_service;

#[get("/advocates")]
pub async fn api_advocates(req: HttpRequest, pool: web::Data<DbPool>) -> impl Responder {
    // Parsed by hand because `degrees` and `specialties` repeat their key.
    let params: AdvocatesQuery = match serde_html_form::from_str(req.query_string()) {
        Ok(params) => params,
        Err(e) => {
            error!("Rejected advocates query string {:?}: {e}", req.query_string());
            return bad_request("Invalid query parameters");
        }
    };

    let repo = DieselAdvocateRepository::new(&pool);

    match advocate_service::list_advocates(&repo, params) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to list advocates: {e}");
            internal_error("Failed to fetch advocates")
        }
    }
}

#[get("/advocates/filters")]
pub async fn api_advocate_filters(pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselAdvocateRepository::new(&pool);

    match advocate_service::filter_options(&repo) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to load filter options: {e}");
            internal_error("Failed to fetch filter options")
        }
    }
}
