use actix_web::{HttpResponse, ResponseError};
use eyre::Report;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced directly as HTTP responses.
///
/// Vendor-side failures never reach this type; they are converted into
/// `success: false` bodies with a 200 status at the controller boundary, so
/// callers can tell "not logged in" (401 here) apart from "vendor is
/// unhappy" (200 with a diagnostic).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Internal Server Error: {0}")]
    InternalEyreError(#[from] Report),

    #[error("Internal Server Error: {0}")]
    InternalError(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InternalError(msg) => {
                HttpResponse::InternalServerError().json(json!({ "success": false, "error": msg }))
            }
            ApiError::BadRequest(msg) => {
                HttpResponse::BadRequest().json(json!({ "success": false, "error": msg }))
            }
            ApiError::Unauthorized(msg) => {
                HttpResponse::Unauthorized().json(json!({ "success": false, "error": msg }))
            }
            ApiError::InternalEyreError(err) => HttpResponse::InternalServerError()
                .json(json!({ "success": false, "error": format!("{err:?}") })),
        }
    }
}
