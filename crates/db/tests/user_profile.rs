//! Repository-level tests for profile reads and the onboarding writes.

use assert_matches::assert_matches;
use mcc_core::profile::{ExperienceLevel, PrimaryLanguage, UserRole};
use mcc_core::stage::{resolve_stage, OnboardingStage};
use mcc_db::models::user::SubmitOnboarding;
use mcc_db::repositories::UserRepo;
use sqlx::PgPool;

fn onboarding(email: &str, level: ExperienceLevel) -> SubmitOnboarding {
    SubmitOnboarding {
        email: email.to_string(),
        display_name: Some("Test User".to_string()),
        role: UserRole::BackendEngineer,
        experience_level: level,
        primary_language: PrimaryLanguage::Go,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_missing_user_returns_none_and_creates_nothing(pool: PgPool) {
    let found = UserRepo::find_by_id(&pool, "uid-missing").await.unwrap();
    assert!(found.is_none());

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upsert_creates_row_with_onboarding_timestamp(pool: PgPool) {
    let input = onboarding("a@example.com", ExperienceLevel::ThreeToFive);
    let user = UserRepo::upsert_onboarding(&pool, "uid-1", &input).await.unwrap();

    assert_eq!(user.id, "uid-1");
    assert_eq!(user.email, "a@example.com");
    assert_eq!(user.role.as_deref(), Some("backend-engineer"));
    assert_eq!(user.experience_level.as_deref(), Some("3-to-5"));
    assert_eq!(user.primary_language.as_deref(), Some("go"));
    assert!(user.onboarding_completed_at.is_some());
    assert!(user.skill_floor_passed.is_none());

    let found = UserRepo::find_by_id(&pool, "uid-1").await.unwrap().unwrap();
    assert_eq!(found.email, user.email);
    assert_eq!(found.display_name, user.display_name);
    assert_eq!(found.role, user.role);
    assert_eq!(found.experience_level, user.experience_level);
    assert_eq!(found.primary_language, user.primary_language);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_upsert_overwrites_every_business_field(pool: PgPool) {
    let first = onboarding("old@example.com", ExperienceLevel::FivePlus);
    UserRepo::upsert_onboarding(&pool, "uid-2", &first).await.unwrap();

    let second = SubmitOnboarding {
        email: "new@example.com".to_string(),
        display_name: None,
        role: UserRole::DevopsSre,
        experience_level: ExperienceLevel::OneToThree,
        primary_language: PrimaryLanguage::Rust,
    };
    let user = UserRepo::upsert_onboarding(&pool, "uid-2", &second).await.unwrap();

    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.display_name, None);
    assert_eq!(user.role.as_deref(), Some("devops-sre"));
    assert_eq!(user.experience_level.as_deref(), Some("1-to-3"));
    assert_eq!(user.primary_language.as_deref(), Some("rust"));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE id = 'uid-2'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn email_is_not_unique(pool: PgPool) {
    let input = onboarding("shared@example.com", ExperienceLevel::FivePlus);
    UserRepo::upsert_onboarding(&pool, "uid-a", &input).await.unwrap();
    UserRepo::upsert_onboarding(&pool, "uid-b", &input).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assessment_requires_completed_onboarding(pool: PgPool) {
    // No row at all.
    let result = UserRepo::record_skill_assessment(&pool, "uid-none", true).await.unwrap();
    assert_matches!(result, None);

    // Row exists but the questionnaire was never submitted.
    sqlx::query("INSERT INTO users (id, email) VALUES ('uid-bare', 'bare@example.com')")
        .execute(&pool)
        .await
        .unwrap();
    let result = UserRepo::record_skill_assessment(&pool, "uid-bare", true).await.unwrap();
    assert_matches!(result, None);

    let bare = UserRepo::find_by_id(&pool, "uid-bare").await.unwrap().unwrap();
    assert!(bare.skill_floor_passed.is_none());
    assert!(bare.skill_floor_completed_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn retaking_the_assessment_overwrites_the_result(pool: PgPool) {
    let input = onboarding("b@example.com", ExperienceLevel::LessThanOne);
    let user = UserRepo::upsert_onboarding(&pool, "uid-3", &input).await.unwrap();
    assert_eq!(resolve_stage(Some(&user.snapshot())), OnboardingStage::Assessment);

    let failed = UserRepo::record_skill_assessment(&pool, "uid-3", false)
        .await
        .unwrap()
        .expect("onboarded user should be updated");
    assert_eq!(failed.skill_floor_passed, Some(false));
    assert!(failed.skill_floor_completed_at.is_some());
    assert_eq!(resolve_stage(Some(&failed.snapshot())), OnboardingStage::NotReady);

    let passed = UserRepo::record_skill_assessment(&pool, "uid-3", true)
        .await
        .unwrap()
        .expect("onboarded user should be updated");
    assert_eq!(passed.skill_floor_passed, Some(true));
    assert!(passed.updated_at >= failed.updated_at);
    assert_eq!(resolve_stage(Some(&passed.snapshot())), OnboardingStage::Ready);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_enum_values_are_rejected_by_the_schema(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO users (id, email, role) VALUES ('uid-x', 'x@example.com', 'wizard')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());
}
