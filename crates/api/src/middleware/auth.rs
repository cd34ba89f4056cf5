//! Firebase bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use mcc_core::error::CoreError;

use crate::auth::firebase::TokenError;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller, identified by the Firebase `uid` (`sub` claim).
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(uid = %user.uid, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub uid: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized("Missing or invalid authorization header"))?;

        let verified = state
            .verifier
            .verify_id_token(token)
            .await
            .map_err(token_rejection)?;

        Ok(AuthUser { uid: verified.uid })
    }
}

/// Map a verification failure to a response error.
///
/// Bad credentials are 401s. A signing-key outage is a server fault: it is
/// masked as a 500 and reaches the error reporter.
fn token_rejection(err: TokenError) -> AppError {
    match err {
        TokenError::Expired => AppError::unauthorized("Token expired"),
        TokenError::KeySetUnavailable(_) => AppError::Core(CoreError::Internal(err.to_string())),
        TokenError::Invalid(_) | TokenError::UnknownKey(_) => {
            tracing::debug!(error = %err, "ID token rejected");
            AppError::unauthorized("Invalid token")
        }
    }
}
