//! Request body extractors.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and then checked with [`Validate`].
///
/// Malformed JSON, schema mismatches (wrong types, unknown or missing
/// fields) and validation failures all reject with `400 VALIDATION_ERROR`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::validation(rejection.body_text()))?;
        value
            .validate()
            .map_err(|errors| AppError::validation(errors.to_string()))?;
        Ok(ValidatedJson(value))
    }
}
