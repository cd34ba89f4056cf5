//! Seeds the curriculum catalog. Safe to run repeatedly.

use anyhow::Context;
use mcc_api::logging::{init_tracing, LogFormat};
use mcc_core::curriculum::CATALOG;
use mcc_db::repositories::CurriculumRepo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(LogFormat::from_env());

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = mcc_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;

    mcc_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let report = CurriculumRepo::seed(&pool, CATALOG)
        .await
        .context("Curriculum seed failed")?;

    tracing::info!(
        tracks_inserted = report.tracks_inserted,
        milestones_inserted = report.milestones_inserted,
        "Curriculum seed complete",
    );

    pool.close().await;
    Ok(())
}
