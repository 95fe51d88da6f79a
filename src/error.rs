use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ports::StoreError;
use crate::use_cases::UseCaseError;
use crate::validation::ValidationError;

pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid.";
pub const RECEIPT_NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(id),
            other => AppError::Store(other),
        }
    }
}

impl From<UseCaseError> for AppError {
    fn from(err: UseCaseError) -> Self {
        match err {
            UseCaseError::Validation(e) => AppError::Validation(e),
            UseCaseError::Store(e) => e.into(),
        }
    }
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to clients. Details stay in the logs.
    fn public_message(&self) -> &'static str {
        match self {
            AppError::Validation(_) | AppError::MalformedBody(_) => INVALID_RECEIPT_MESSAGE,
            AppError::NotFound(_) => RECEIPT_NOT_FOUND_MESSAGE,
            AppError::Store(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = Json(json!({
            "error": self.public_message(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Constraint;

    fn validation_error() -> ValidationError {
        ValidationError::new("total", Constraint::Pattern, "bad total")
    }

    #[test]
    fn test_validation_error_status_code() {
        let error = AppError::Validation(validation_error());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.public_message(), INVALID_RECEIPT_MESSAGE);
    }

    #[test]
    fn test_not_found_error_status_code() {
        let error = AppError::NotFound("abc".to_string());
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.public_message(), RECEIPT_NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_store_error_status_code() {
        let error = AppError::Store(StoreError::Database(sqlx::Error::RowNotFound));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let error = AppError::from(StoreError::NotFound("abc".to_string()));
        assert!(matches!(error, AppError::NotFound(id) if id == "abc"));
    }

    #[test]
    fn test_corrupt_receipt_is_server_error() {
        let error = AppError::from(StoreError::Corrupt(validation_error()));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_use_case_errors_keep_their_category() {
        let invalid = AppError::from(UseCaseError::Validation(validation_error()));
        let missing = AppError::from(UseCaseError::Store(StoreError::NotFound("x".to_string())));

        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let response = AppError::Validation(validation_error()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_not_found_error_response() {
        let response = AppError::NotFound("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
