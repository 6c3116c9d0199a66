//! Error Types
//!
//! - **`StoreError`**: the book source could not be read or parsed at startup.
//!   Only ever seen by the loader, which recovers by using an empty store.
//! - **`ApiError`**: a query produced no data where the client expected some.
//!   Rendered as a JSON body with the matching HTTP status.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read book source: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed book source: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            status: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
