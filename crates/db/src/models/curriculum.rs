//! Track and milestone catalog rows.

use mcc_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `milestones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Milestone {
    pub id: String,
    pub track_id: String,
    pub title: String,
    pub slug: String,
    pub position: i32,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
