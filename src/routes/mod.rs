//! HTTP surface of the directory.

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse, web};

use crate::dto::api::ErrorResponse;
use crate::routes::api::{create_company, list_companies};

pub mod api;

/// Rejects malformed JSON bodies with a 400 and an error body.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    log::warn!("Rejected JSON payload: {err}");
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

/// Rejects malformed query strings with a 400 and an error body.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    log::warn!("Rejected query string: {err}");
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

/// Registers the `/api` scope with its extractor configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .service(list_companies)
            .service(create_company),
    );
}
