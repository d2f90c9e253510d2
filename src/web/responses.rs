//! Error-to-response mapping
//!
//! Each [`AppError`] kind maps to exactly one status class: missing
//! parameters are 400, resolver/parser misses are 404, upstream failures
//! mirror the provider's status, and everything else is 500. Bodies are a
//! machine-readable `{"error": ...}` object.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use tracing::{error, warn};

use crate::errors::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingParam => StatusCode::BAD_REQUEST,
            AppError::QualityNotFound | AppError::NoVariants => StatusCode::NOT_FOUND,
            AppError::Upstream { status, .. } => {
                // Mirror the provider's status where it is a valid code
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Http(_) | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::MissingParam, StatusCode::BAD_REQUEST),
            (AppError::QualityNotFound, StatusCode::NOT_FOUND),
            (AppError::NoVariants, StatusCode::NOT_FOUND),
            (AppError::upstream(403, "https://p.example/x"), StatusCode::FORBIDDEN),
            (AppError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
