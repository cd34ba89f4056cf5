//! mycscompanion API server library.
//!
//! Exposes config, state, error handling, auth and routes so integration
//! tests and the binaries can share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod reporting;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
