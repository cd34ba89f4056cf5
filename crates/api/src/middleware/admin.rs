//! Basic-auth guard for the admin dashboard.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};

use crate::auth::basic::ADMIN_REALM;
use crate::error::AppError;
use crate::state::AppState;

/// Requires valid admin basic-auth credentials.
///
/// Rejects with 401 and a `WWW-Authenticate` challenge so browsers prompt
/// for credentials. Also rejects when no admin password is configured,
/// although the routes are not mounted at all in that case.
pub struct RequireAdmin;

pub struct AdminChallenge;

impl IntoResponse for AdminChallenge {
    fn into_response(self) -> Response {
        let mut response =
            AppError::unauthorized("Admin credentials required").into_response();
        if let Ok(value) = HeaderValue::from_str(&format!("Basic realm=\"{ADMIN_REALM}\"")) {
            response.headers_mut().insert(WWW_AUTHENTICATE, value);
        }
        response
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AdminChallenge;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let creds = state.config.admin.as_ref().ok_or(AdminChallenge)?;
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AdminChallenge)?;

        if !creds.check(header) {
            tracing::warn!("Rejected admin login");
            return Err(AdminChallenge);
        }
        Ok(RequireAdmin)
    }
}
