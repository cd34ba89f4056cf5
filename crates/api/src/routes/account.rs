use axum::routing::{get, post};
use axum::Router;

use crate::handlers::account;
use crate::state::AppState;

/// Routes mounted at `/api/account`. All require a Firebase bearer token.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(account::get_profile))
        .route("/onboarding", post(account::submit_onboarding))
        .route("/onboarding-stage", get(account::get_onboarding_stage))
        .route("/skill-assessment", post(account::submit_skill_assessment))
        .route(
            "/skill-assessment/questions",
            get(account::list_skill_floor_questions),
        )
        .route("/skill-assessment/grade", post(account::grade_skill_floor))
}
