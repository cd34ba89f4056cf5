//! User profile entity model and DTOs.

use mcc_core::profile::{ExperienceLevel, PrimaryLanguage, UserRole};
use mcc_core::stage::ProfileSnapshot;
use mcc_core::types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `users` table.
///
/// Enum columns are kept as their stored strings; they are validated on the
/// way in by [`SubmitOnboarding`] and by `CHECK` constraints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub display_name: Option<String>,
    pub role: Option<String>,
    pub experience_level: Option<String>,
    pub primary_language: Option<String>,
    pub onboarding_completed_at: Option<Timestamp>,
    pub skill_floor_passed: Option<bool>,
    pub skill_floor_completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// The fields the onboarding gate is evaluated on.
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            onboarding_completed_at: self.onboarding_completed_at,
            experience_level: self
                .experience_level
                .as_deref()
                .and_then(|s| ExperienceLevel::from_str_db(s).ok()),
            skill_floor_passed: self.skill_floor_passed,
            skill_floor_completed_at: self.skill_floor_completed_at,
        }
    }
}

/// Onboarding questionnaire submission.
///
/// All five business fields are written on every submission; there is no
/// partial variant.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubmitOnboarding {
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub role: UserRole,
    pub experience_level: ExperienceLevel,
    pub primary_language: PrimaryLanguage,
}

/// Skill floor check outcome.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SubmitSkillAssessment {
    pub passed: bool,
}
