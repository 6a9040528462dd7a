use actix_web::HttpResponse;

use crate::dto::api::ErrorResponse;

pub mod api;

/// 500 with an opaque body; the underlying failure stays in the server log.
pub(crate) fn internal_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: message.to_string(),
    })
}

pub(crate) fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: message.to_string(),
    })
}
