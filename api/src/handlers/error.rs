//! Mapping from domain errors to HTTP responses
//!
//! Caller-caused errors carry their message through. Server-side failures
//! are logged with their detail and answered with a fixed message.

use actix_web::{
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    Error, HttpRequest, HttpResponse,
};

use rt_core::errors::{DomainError, ValidationError};
use rt_shared::ErrorResponse;

/// Body used for every 500
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation(validation) => {
            tracing::debug!(error = %validation, "Rejected invalid request");
            HttpResponse::BadRequest().json(ErrorResponse::new(validation.to_string()))
        }
        DomainError::Auth(auth) => {
            HttpResponse::Unauthorized().json(ErrorResponse::new(auth.to_string()))
        }
        DomainError::Token(token) => {
            HttpResponse::Unauthorized().json(ErrorResponse::new(token.to_string()))
        }
        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().json(ErrorResponse::new(format!("{} not found", resource)))
        }
        DomainError::Storage { message } => {
            tracing::error!(error = %message, "Storage failure");
            internal_error()
        }
        DomainError::Hashing { message } => {
            tracing::error!(error = %message, "Password hashing failure");
            internal_error()
        }
        DomainError::Internal { message } => {
            tracing::error!(error = %message, "Internal failure");
            internal_error()
        }
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(INTERNAL_ERROR_MESSAGE))
}

/// `JsonConfig` hook: undecodable bodies become 400 with a JSON error
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let response = handle_domain_error(
        ValidationError::InvalidJson {
            reason: err.to_string(),
        }
        .into(),
    );
    InternalError::from_response(err, response).into()
}

/// `QueryConfig` hook: malformed query strings become 400
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let response = handle_domain_error(
        ValidationError::InvalidIdentifier {
            value: err.to_string(),
        }
        .into(),
    );
    InternalError::from_response(err, response).into()
}

/// Default service for resources hit with an unsupported verb
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorResponse::new("Method not allowed"))
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not found"))
}
