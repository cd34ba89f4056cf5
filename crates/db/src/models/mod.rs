//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Rows serialize with their snake_case column names; the
//! API converts keys to camelCase at the boundary.

pub mod curriculum;
pub mod user;
