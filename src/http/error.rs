//! HTTP error handling and response types.
//!
//! Only the list endpoint surfaces errors as HTTP errors; the booking
//! endpoint folds every failure into its 200 response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;

/// Error response body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::Internal(msg) => msg,
            AppError::Repository(e) => e.to_string(),
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError { error: message }),
        )
            .into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}
