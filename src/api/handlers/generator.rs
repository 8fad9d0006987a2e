// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::{debug, warn};
use crate::models::PasswordGenerationOptions;
use crate::generators::{password, strength, PasswordGenerator};
use crate::api::types::{
    BatchRequest, BatchResponse, ErrorResponse, GenerateQuery, PasswordResponse,
    StrengthQuery, StrengthResponse,
};
use crate::api::utils::bad_request;

/// Generate a password
///
/// Generates a single random password from the enabled character classes.
#[utoipa::path(
    get,
    path = "/generate",
    tag = "Generator",
    params(GenerateQuery),
    responses(
        (status = 200, description = "Generated password", body = PasswordResponse),
        (status = 400, description = "Invalid options", body = ErrorResponse)
    )
)]
pub async fn generate_password(
    generator: web::Data<PasswordGenerator>,
    query: web::Query<GenerateQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let options = PasswordGenerationOptions {
        length: query.length,
        include_uppercase: query.uppercase,
        include_lowercase: query.lowercase,
        include_digits: query.digits,
        include_symbols: query.symbols,
    };

    let result = password::validate_length(options.length)
        .and_then(|_| generator.generate_password(&options));

    match result {
        Ok(password) => {
            debug!("Generated password of length {}", options.length);
            HttpResponse::Ok().json(PasswordResponse { password })
        }
        Err(e) => {
            warn!("Rejected generate request {:?}: {}", options, e);
            bad_request(e.to_string())
        }
    }
}

/// Generate a batch of passwords
///
/// Validates the whole request before producing any password.
#[utoipa::path(
    post,
    path = "/generate/batch",
    tag = "Generator",
    request_body = BatchRequest,
    responses(
        (status = 200, description = "Generated passwords", body = BatchResponse),
        (status = 400, description = "Invalid length, count or options", body = ErrorResponse)
    )
)]
pub async fn generate_batch(
    generator: web::Data<PasswordGenerator>,
    batch_req: web::Json<BatchRequest>,
) -> impl Responder {
    // Negative lengths fail the minimum check; negative counts yield an empty batch.
    let options = PasswordGenerationOptions {
        length: usize::try_from(batch_req.length).unwrap_or(0),
        include_uppercase: batch_req.uppercase,
        include_lowercase: batch_req.lowercase,
        include_digits: batch_req.digits,
        include_symbols: batch_req.symbols,
    };
    let count = usize::try_from(batch_req.count).unwrap_or(0);

    match generator.generate_batch(&options, count) {
        Ok(passwords) => {
            debug!("Generated batch of {} passwords of length {}", passwords.len(), options.length);
            HttpResponse::Ok().json(BatchResponse { passwords })
        }
        Err(e) => {
            warn!("Rejected batch request {:?}: {}", batch_req, e);
            bad_request(e.to_string())
        }
    }
}

/// Check password strength
///
/// Scores the password from 0 to 4 and suggests improvements.
#[utoipa::path(
    get,
    path = "/strength",
    tag = "Strength",
    params(StrengthQuery),
    responses(
        (status = 200, description = "Strength report", body = StrengthResponse),
        (status = 400, description = "Missing or empty password", body = ErrorResponse)
    )
)]
pub async fn check_strength(query: web::Query<StrengthQuery>) -> impl Responder {
    let password = query.into_inner().password;
    if password.is_empty() {
        warn!("Rejected strength request with empty password");
        return bad_request("Password must not be empty.");
    }

    let report = strength::evaluate(&password);
    HttpResponse::Ok().json(StrengthResponse {
        score: report.score,
        strength: report.label,
        recommendation: report.recommendation(),
        password,
    })
}
