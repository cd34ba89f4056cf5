//! Handlers for the `/api/account` resource: profile, onboarding and the
//! skill floor check.
//!
//! Every route requires a verified Firebase identity; the caller's `uid` is
//! the profile id. Responses are camelCase JSON without an envelope.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use mcc_core::error::CoreError;
use mcc_core::skill_floor::{self, GradeResult, PublicQuestion};
use mcc_core::stage::{resolve_stage, OnboardingStage};
use mcc_db::models::user::{SubmitOnboarding, SubmitSkillAssessment};
use mcc_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::response::camel_json;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// GET /api/account/profile
///
/// Returns 404 until the onboarding questionnaire has been submitted.
pub async fn get_profile(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Value>> {
    let profile = UserRepo::find_by_id(&state.pool, &user.uid)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "User profile",
        })?;

    camel_json(&profile)
}

/// POST /api/account/onboarding
///
/// Creates the profile on first submission and fully overwrites it on every
/// later one.
pub async fn submit_onboarding(
    user: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<SubmitOnboarding>,
) -> AppResult<Json<Value>> {
    let profile = UserRepo::upsert_onboarding(&state.pool, &user.uid, &input).await?;

    tracing::info!(
        uid = %user.uid,
        experience_level = input.experience_level.as_str(),
        "onboarding_completed",
    );

    camel_json(&profile)
}

// ---------------------------------------------------------------------------
// Skill floor
// ---------------------------------------------------------------------------

/// POST /api/account/skill-assessment
///
/// Records the pass/fail outcome. Overwrites earlier attempts.
pub async fn submit_skill_assessment(
    user: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<SubmitSkillAssessment>,
) -> AppResult<Json<Value>> {
    let profile = UserRepo::record_skill_assessment(&state.pool, &user.uid, input.passed)
        .await?
        .ok_or_else(|| {
            CoreError::OnboardingRequired("Complete onboarding before taking the assessment".into())
        })?;

    tracing::info!(uid = %user.uid, passed = input.passed, "skill_assessment_completed");

    camel_json(&profile)
}

/// GET /api/account/skill-assessment/questions
pub async fn list_skill_floor_questions(_user: AuthUser) -> Json<Vec<PublicQuestion>> {
    Json(skill_floor::public_questions())
}

/// Answers keyed by question id; values are option indices.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GradeSkillFloor {
    pub answers: HashMap<u32, usize>,
}

/// POST /api/account/skill-assessment/grade
///
/// Grades answers without persisting anything; the client submits the
/// outcome through `submit_skill_assessment`.
pub async fn grade_skill_floor(
    _user: AuthUser,
    ValidatedJson(input): ValidatedJson<GradeSkillFloor>,
) -> AppResult<Json<GradeResult>> {
    let result = skill_floor::grade(&input.answers)?;
    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// Onboarding stage
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct StageResponse {
    pub stage: OnboardingStage,
    pub route: &'static str,
}

/// GET /api/account/onboarding-stage
///
/// A missing profile resolves to the questionnaire.
pub async fn get_onboarding_stage(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<StageResponse>> {
    let profile = UserRepo::find_by_id(&state.pool, &user.uid).await?;
    let snapshot = profile.as_ref().map(|p| p.snapshot());
    let stage = resolve_stage(snapshot.as_ref());
    tracing::debug!(uid = %user.uid, stage = stage.as_str(), "Resolved onboarding stage");

    Ok(Json(StageResponse {
        stage,
        route: stage.route(),
    }))
}
