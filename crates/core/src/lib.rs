//! Domain logic for mycscompanion.
//!
//! This crate has no database or HTTP dependencies. Everything here is a
//! pure function or plain data so the API and repository layers can share it
//! and so it can be tested in isolation.

pub mod case;
pub mod curriculum;
pub mod error;
pub mod profile;
pub mod skill_floor;
pub mod stage;
pub mod types;
