use std::sync::Arc;

use crate::auth::firebase::TokenVerifier;
use crate::config::ServerConfig;
use crate::reporting::ErrorReporter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything heavy sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: mcc_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Identity verifier for bearer ID tokens.
    pub verifier: Arc<dyn TokenVerifier>,
    /// Sink for 5xx faults.
    pub reporter: Arc<dyn ErrorReporter>,
}
