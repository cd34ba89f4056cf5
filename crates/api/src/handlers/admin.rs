//! Admin dashboard handlers.

use axum::Json;
use serde_json::{json, Value};

use crate::middleware::admin::RequireAdmin;

/// GET /admin/queues
///
/// No background queues are registered yet, so the listing is empty.
pub async fn list_queues(_admin: RequireAdmin) -> Json<Value> {
    Json(json!({ "queues": [] }))
}
