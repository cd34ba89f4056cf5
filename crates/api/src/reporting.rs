//! Server-fault reporting.
//!
//! Handlers never talk to the error tracker directly. A 5xx response carries
//! a [`ServerFault`] extension with the unmasked detail, and the
//! [`report_errors`] middleware hands it to the configured [`ErrorReporter`]
//! together with the request method and URI.

use std::any::Any;

use axum::extract::{Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::{error_body, MASKED_MESSAGE};
use crate::state::AppState;

/// Unmasked description of a server fault, attached to 5xx responses.
#[derive(Debug, Clone)]
pub struct ServerFault {
    pub detail: String,
}

impl ServerFault {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// A fault as delivered to the tracker.
#[derive(Debug, Clone)]
pub struct FaultReport {
    pub method: Method,
    pub uri: Uri,
    pub status: StatusCode,
    pub detail: String,
}

/// Destination for server faults (error tracker, log sink, test recorder).
pub trait ErrorReporter: Send + Sync {
    fn report(&self, fault: &FaultReport);
}

/// Default reporter: a structured error log line.
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, fault: &FaultReport) {
        tracing::error!(
            method = %fault.method,
            uri = %fault.uri,
            status = fault.status.as_u16(),
            detail = %fault.detail,
            "Server error",
        );
    }
}

/// Middleware classifying responses by status: 5xx go to the reporter,
/// 4xx are logged as client errors.
///
/// Runs outside the timeout layer, whose 408 has an empty body; that
/// response is replaced with the standard error envelope.
pub async fn report_errors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        let detail = response
            .extensions()
            .get::<ServerFault>()
            .map(|f| f.detail.clone())
            .unwrap_or_else(|| format!("{status} without fault detail"));
        state.reporter.report(&FaultReport {
            method,
            uri,
            status,
            detail,
        });
    } else if status.is_client_error() {
        tracing::warn!(method = %method, uri = %uri, status = status.as_u16(), "Client error");
    }

    if status == StatusCode::REQUEST_TIMEOUT && !response.headers().contains_key(CONTENT_TYPE) {
        return (
            StatusCode::REQUEST_TIMEOUT,
            error_body("REQUEST_TIMEOUT", "Request timed out"),
        )
            .into_response();
    }

    response
}

/// Render a caught panic as a masked 500 carrying the panic message.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_body("INTERNAL_ERROR", MASKED_MESSAGE),
    )
        .into_response();
    response
        .extensions_mut()
        .insert(ServerFault::new(format!("panic: {detail}")));
    response
}
