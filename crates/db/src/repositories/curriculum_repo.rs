//! Repository for the `tracks` and `milestones` catalog tables.

use mcc_core::curriculum::TrackSeed;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::curriculum::{Milestone, Track};

const TRACK_COLUMNS: &str = "id, name, slug, description, created_at, updated_at";

const MILESTONE_COLUMNS: &str =
    "id, track_id, title, slug, position, description, created_at, updated_at";

/// Rows actually inserted by a seed run. Zero on a repeat run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub tracks_inserted: u64,
    pub milestones_inserted: u64,
}

/// Provides catalog seeding and lookups.
pub struct CurriculumRepo;

impl CurriculumRepo {
    /// Insert the given catalog, skipping anything already present.
    ///
    /// Tracks conflict on `slug`, milestones on `(track_id, slug)`. Runs in a
    /// single transaction so a failed seed leaves nothing behind.
    pub async fn seed(pool: &PgPool, catalog: &[TrackSeed]) -> Result<SeedReport, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut report = SeedReport::default();

        for track in catalog {
            let inserted = sqlx::query(
                "INSERT INTO tracks (id, name, slug, description)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT (slug) DO NOTHING",
            )
            .bind(Uuid::now_v7().to_string())
            .bind(track.name)
            .bind(track.slug)
            .bind(track.description)
            .execute(&mut *tx)
            .await?;
            report.tracks_inserted += inserted.rows_affected();

            // The track may already exist from an earlier run.
            let (track_id,): (String,) = sqlx::query_as("SELECT id FROM tracks WHERE slug = $1")
                .bind(track.slug)
                .fetch_one(&mut *tx)
                .await?;

            for milestone in track.milestones {
                let inserted = sqlx::query(
                    "INSERT INTO milestones (id, track_id, title, slug, position, description)
                     VALUES ($1, $2, $3, $4, $5, $6)
                     ON CONFLICT (track_id, slug) DO NOTHING",
                )
                .bind(Uuid::now_v7().to_string())
                .bind(&track_id)
                .bind(milestone.title)
                .bind(milestone.slug)
                .bind(milestone.position)
                .bind(milestone.description)
                .execute(&mut *tx)
                .await?;
                report.milestones_inserted += inserted.rows_affected();
            }
        }

        tx.commit().await?;
        tracing::debug!(
            tracks = report.tracks_inserted,
            milestones = report.milestones_inserted,
            "Curriculum seed applied"
        );
        Ok(report)
    }

    /// Find a track by slug.
    pub async fn find_track_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {TRACK_COLUMNS} FROM tracks WHERE slug = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List a track's milestones in position order.
    pub async fn list_milestones(
        pool: &PgPool,
        track_id: &str,
    ) -> Result<Vec<Milestone>, sqlx::Error> {
        let query = format!(
            "SELECT {MILESTONE_COLUMNS} FROM milestones WHERE track_id = $1 ORDER BY position"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(track_id)
            .fetch_all(pool)
            .await
    }
}
