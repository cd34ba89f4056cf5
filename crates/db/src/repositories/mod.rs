//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or a transaction) as the first argument.

pub mod curriculum_repo;
pub mod user_repo;

pub use curriculum_repo::{CurriculumRepo, SeedReport};
pub use user_repo::UserRepo;
