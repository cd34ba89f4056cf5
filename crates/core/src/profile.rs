//! Onboarding questionnaire answers: user role, experience level and primary
//! language.
//!
//! Each enum round-trips through its kebab-case wire/database string. The
//! database stores these as plain `TEXT` guarded by `CHECK` constraints, so
//! the repository layer binds [`as_str`](UserRole::as_str) values. Only the
//! experience level is parsed back from rows, since the onboarding gate
//! branches on it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// User role
// ---------------------------------------------------------------------------

/// What the user does day to day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "backend-engineer")]
    BackendEngineer,
    #[serde(rename = "frontend-engineer")]
    FrontendEngineer,
    #[serde(rename = "fullstack-engineer")]
    FullstackEngineer,
    #[serde(rename = "devops-sre")]
    DevopsSre,
    #[serde(rename = "student")]
    Student,
    #[serde(rename = "other")]
    Other,
}

/// All valid role strings, in questionnaire order.
pub const VALID_ROLES: &[&str] = &[
    "backend-engineer",
    "frontend-engineer",
    "fullstack-engineer",
    "devops-sre",
    "student",
    "other",
];

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BackendEngineer => "backend-engineer",
            Self::FrontendEngineer => "frontend-engineer",
            Self::FullstackEngineer => "fullstack-engineer",
            Self::DevopsSre => "devops-sre",
            Self::Student => "student",
            Self::Other => "other",
        }
    }

}

// ---------------------------------------------------------------------------
// Experience level
// ---------------------------------------------------------------------------

/// Years of professional programming experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "less-than-1")]
    LessThanOne,
    #[serde(rename = "1-to-3")]
    OneToThree,
    #[serde(rename = "3-to-5")]
    ThreeToFive,
    #[serde(rename = "5-plus")]
    FivePlus,
}

pub const VALID_EXPERIENCE_LEVELS: &[&str] = &["less-than-1", "1-to-3", "3-to-5", "5-plus"];

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LessThanOne => "less-than-1",
            Self::OneToThree => "1-to-3",
            Self::ThreeToFive => "3-to-5",
            Self::FivePlus => "5-plus",
        }
    }

    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "less-than-1" => Ok(Self::LessThanOne),
            "1-to-3" => Ok(Self::OneToThree),
            "3-to-5" => Ok(Self::ThreeToFive),
            "5-plus" => Ok(Self::FivePlus),
            _ => Err(invalid_value("experienceLevel", s, VALID_EXPERIENCE_LEVELS)),
        }
    }

    /// Users below one year of experience must pass the skill floor check
    /// before they get access to a track.
    pub fn requires_skill_floor(&self) -> bool {
        matches!(self, Self::LessThanOne)
    }
}

// ---------------------------------------------------------------------------
// Primary language
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryLanguage {
    #[serde(rename = "go")]
    Go,
    #[serde(rename = "python")]
    Python,
    #[serde(rename = "javascript-typescript")]
    JavascriptTypescript,
    #[serde(rename = "rust")]
    Rust,
    #[serde(rename = "java")]
    Java,
    #[serde(rename = "c-cpp")]
    CCpp,
    #[serde(rename = "other")]
    Other,
}

pub const VALID_PRIMARY_LANGUAGES: &[&str] = &[
    "go",
    "python",
    "javascript-typescript",
    "rust",
    "java",
    "c-cpp",
    "other",
];

impl PrimaryLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Python => "python",
            Self::JavascriptTypescript => "javascript-typescript",
            Self::Rust => "rust",
            Self::Java => "java",
            Self::CCpp => "c-cpp",
            Self::Other => "other",
        }
    }

}

fn invalid_value(field: &str, value: &str, valid: &[&str]) -> CoreError {
    CoreError::Validation(format!(
        "Invalid {field} '{value}'. Must be one of: {}",
        valid.join(", ")
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
