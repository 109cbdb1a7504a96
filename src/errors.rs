use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

use crate::external::quote_provider::QuoteUnavailable;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Symbol {0} already exists")]
    DuplicateSymbol(String),
    #[error("Not found")]
    NotFound,
    #[error(transparent)]
    Quote(#[from] QuoteUnavailable),
    #[error("Scheduler error: {0}")]
    Scheduler(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::DuplicateSymbol(_) => {
                (StatusCode::CONFLICT, self.to_string()).into_response()
            }
            AppError::Quote(_) => (StatusCode::BAD_GATEWAY, self.to_string()).into_response(),
            AppError::Scheduler(_) | AppError::Db(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

impl From<String> for AppError {
    fn from(value: String) -> Self {
        AppError::Validation(value)
    }
}
