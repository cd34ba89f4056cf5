//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{SubmitOnboarding, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, display_name, role, experience_level, primary_language, \
                       onboarding_completed_at, skill_floor_passed, skill_floor_completed_at, \
                       created_at, updated_at";

/// Provides profile reads and the two onboarding writes.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by id. Never creates a row.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or fully overwrite the user's onboarding answers.
    ///
    /// On conflict every business field is replaced (no field-level merge)
    /// and `onboarding_completed_at` is stamped again, so it reflects the
    /// latest submission rather than the first one.
    pub async fn upsert_onboarding(
        pool: &PgPool,
        id: &str,
        input: &SubmitOnboarding,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users
                (id, email, display_name, role, experience_level, primary_language,
                 onboarding_completed_at)
             VALUES ($1, $2, $3, $4, $5, $6, NOW())
             ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                display_name = EXCLUDED.display_name,
                role = EXCLUDED.role,
                experience_level = EXCLUDED.experience_level,
                primary_language = EXCLUDED.primary_language,
                onboarding_completed_at = NOW(),
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.display_name)
            .bind(input.role.as_str())
            .bind(input.experience_level.as_str())
            .bind(input.primary_language.as_str())
            .fetch_one(pool)
            .await
    }

    /// Record a skill floor result, overwriting any previous attempt.
    ///
    /// Only matches users whose onboarding is complete. Returns `None` when
    /// the user does not exist or has not finished onboarding; callers treat
    /// both the same way.
    pub async fn record_skill_assessment(
        pool: &PgPool,
        id: &str,
        passed: bool,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                skill_floor_passed = $2,
                skill_floor_completed_at = NOW(),
                updated_at = NOW()
             WHERE id = $1 AND onboarding_completed_at IS NOT NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(passed)
            .fetch_optional(pool)
            .await
    }
}
