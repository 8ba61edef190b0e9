use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("email already registered")]
    DuplicateEmail,

    #[error("parcel already assigned to a rider")]
    AlreadyAssigned,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("rider is not assigned to this parcel")]
    NotAssigned,

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("authorization token missing")]
    TokenMissing,

    #[error("authorization token expired")]
    TokenExpired,

    #[error("authorization token invalid")]
    TokenInvalid,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::DuplicateEmail => "duplicate_email",
            AppError::AlreadyAssigned => "already_assigned",
            AppError::NotFound(_) => "not_found",
            AppError::Forbidden(_) => "forbidden",
            AppError::NotAssigned => "not_assigned",
            AppError::InvalidStatus(_) => "invalid_status",
            AppError::TokenMissing => "token_missing",
            AppError::TokenExpired => "token_expired",
            AppError::TokenInvalid => "token_invalid",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::Internal(_) => "internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateEmail | AppError::AlreadyAssigned => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) | AppError::NotAssigned => StatusCode::FORBIDDEN,
            AppError::TokenMissing
            | AppError::TokenExpired
            | AppError::TokenInvalid
            | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            // Internal faults are logged with context server-side and surface
            // as a generic message that reveals no detail to the caller.
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "internal fault");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": message,
            "kind": self.kind()
        }));

        (self.status(), body).into_response()
    }
}
