//! Request-level error taxonomy and the JSON error envelope.
//!
//! Every error that escapes a handler is converted into a
//! `{error, message, timestamp}` JSON body at the response boundary.
//! Internal details are logged, never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON envelope carried by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, "Bad Request", reason.clone())
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "The requested resource was not found".to_string(),
            ),
            _ => {
                tracing::error!("Internal error: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: error.to_string(),
            message,
            timestamp: Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}
