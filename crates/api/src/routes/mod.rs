pub mod account;
pub mod admin;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /account/profile                         GET
/// /account/onboarding                      POST
/// /account/onboarding-stage                GET
/// /account/skill-assessment                POST
/// /account/skill-assessment/questions      GET
/// /account/skill-assessment/grade          POST
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/account", account::router())
}
