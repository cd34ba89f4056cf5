//! Response shaping for API handlers.
//!
//! Rows are serialized with their snake_case field names and then passed
//! through [`to_camel_case`] so every JSON body uses lowerCamelCase keys.

use axum::Json;
use mcc_core::case::to_camel_case;
use mcc_core::error::CoreError;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;

/// Serialize `value` and convert all object keys to camelCase.
pub fn camel_json<T: Serialize>(value: &T) -> AppResult<Json<Value>> {
    let raw = serde_json::to_value(value)
        .map_err(|e| CoreError::Internal(format!("response serialization failed: {e}")))?;
    Ok(Json(to_camel_case(&raw)))
}
