use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mcc_core::error::CoreError;
use serde_json::json;

use crate::reporting::ServerFault;

/// Message returned to clients for every 5xx response.
pub const MASKED_MESSAGE: &str = "Internal Server Error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for store
/// failures. Renders the `{"error":{"code","message"}}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Core(CoreError::Unauthorized(message.into()))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Core(CoreError::Validation(message.into()))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                CoreError::Validation(_) | CoreError::OnboardingRequired(_) => {
                    StatusCode::BAD_REQUEST
                }
                CoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => "NOT_FOUND",
                CoreError::Validation(_) => "VALIDATION_ERROR",
                CoreError::OnboardingRequired(_) => "ONBOARDING_REQUIRED",
                CoreError::Unauthorized(_) => "UNAUTHORIZED",
                CoreError::Internal(_) => "INTERNAL_ERROR",
            },
            AppError::Database(_) => "INTERNAL_ERROR",
        }
    }

    /// Client-facing message. Server faults are masked.
    fn public_message(&self) -> String {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity } => format!("{entity} not found"),
                CoreError::Validation(msg)
                | CoreError::OnboardingRequired(msg)
                | CoreError::Unauthorized(msg) => msg.clone(),
                CoreError::Internal(_) => MASKED_MESSAGE.to_string(),
            },
            AppError::Database(_) => MASKED_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = error_body(self.code(), &self.public_message());
        let mut response = (status, body).into_response();

        if status.is_server_error() {
            // Full detail travels to the reporter, never to the client.
            response
                .extensions_mut()
                .insert(ServerFault::new(self.to_string()));
        }
        response
    }
}

/// The standard error envelope.
pub fn error_body(code: &str, message: &str) -> axum::Json<serde_json::Value> {
    axum::Json(json!({
        "error": {
            "code": code,
            "message": message,
        }
    }))
}
