//! # API Errors
//!
//! Maps [`AccreditError`] onto HTTP status codes and `{ "error": ... }` bodies.
//!
//! | Error | Status | Body |
//! |-------|--------|------|
//! | `ValidationError` | 400 | the validation message |
//! | malformed JSON body | 400 | the extractor's rejection text |
//! | `DocumentNotFound` | 404 | `Document not found` |
//! | anything else | 500 | the error text |

use super::types::ErrorResponse;
use accreditrack_core::AccreditError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Error returned by handlers.
#[derive(Debug)]
pub struct ApiError(pub AccreditError);

impl From<AccreditError> for ApiError {
    fn from(e: AccreditError) -> Self {
        Self(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AccreditError::ValidationError(rejection.body_text()))
    }
}

impl ApiError {
    /// Status code and body message for this error.
    pub fn parts(&self) -> (StatusCode, String) {
        match &self.0 {
            AccreditError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AccreditError::DocumentNotFound(_) => {
                (StatusCode::NOT_FOUND, "Document not found".to_string())
            }
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.parts();

        if self.0.is_client_error() {
            tracing::debug!(error = %self.0, status = status.as_u16(), "Request rejected");
        } else {
            tracing::error!(error = %self.0, "Request failed");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
