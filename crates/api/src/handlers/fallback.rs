//! Responses for requests no route handles, in the standard error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mcc_core::error::CoreError;

use crate::error::{error_body, AppError};

/// Any path without a route.
pub async fn route_not_found() -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Route" })
}

/// A known path called with an unsupported method.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        error_body("METHOD_NOT_ALLOWED", "Method not allowed"),
    )
        .into_response()
}
