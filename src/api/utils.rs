// src/api/utils.rs

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use log::warn;
use crate::api::types::ErrorResponse;

/// 400 response carrying a `detail` message.
pub fn bad_request(detail: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse { detail: detail.into() })
}

/// Query extractor failures (missing or malformed parameters) as JSON 400s.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, req: &HttpRequest| {
        warn!("Rejected query for {}: {}", req.path(), err);
        let response = bad_request(err.to_string());
        InternalError::from_response(err, response).into()
    })
}

/// JSON body extractor failures as JSON 400s.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| {
        warn!("Rejected body for {}: {}", req.path(), err);
        let response = bad_request(err.to_string());
        InternalError::from_response(err, response).into()
    })
}
