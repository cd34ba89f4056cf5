use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. Guarded by basic auth, not Firebase.
pub fn router() -> Router<AppState> {
    Router::new().route("/queues", get(admin::list_queues))
}
