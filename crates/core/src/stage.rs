//! Onboarding gate: which step of the onboarding flow a user is on.
//!
//! The stage is never stored. It is derived from four profile fields every
//! time it is needed, both to pick the screen a user sees and to decide
//! whether a gated route may render.
//!
//! ```text
//! onboarding_completed_at = NULL            -> QUESTIONNAIRE
//! experience_level != less-than-1           -> READY
//! skill_floor_completed_at = NULL           -> ASSESSMENT
//! skill_floor_passed = false                -> NOT_READY
//! otherwise                                 -> READY
//! ```

use serde::{Deserialize, Serialize};

use crate::profile::ExperienceLevel;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// The onboarding step a user should see next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnboardingStage {
    /// Questionnaire not yet submitted.
    Questionnaire,
    /// Under one year of experience and the skill floor check not taken.
    Assessment,
    /// Skill floor check taken and failed.
    NotReady,
    /// Full access.
    Ready,
}

pub const ROUTE_QUESTIONNAIRE: &str = "/onboarding";
pub const ROUTE_ASSESSMENT: &str = "/onboarding/assessment";
pub const ROUTE_NOT_READY: &str = "/onboarding/not-ready";
pub const ROUTE_READY: &str = "/overview";

impl OnboardingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Questionnaire => "QUESTIONNAIRE",
            Self::Assessment => "ASSESSMENT",
            Self::NotReady => "NOT_READY",
            Self::Ready => "READY",
        }
    }

    /// The client route reserved for this stage.
    pub fn route(&self) -> &'static str {
        match self {
            Self::Questionnaire => ROUTE_QUESTIONNAIRE,
            Self::Assessment => ROUTE_ASSESSMENT,
            Self::NotReady => ROUTE_NOT_READY,
            Self::Ready => ROUTE_READY,
        }
    }

    /// The stage a client route is reserved for.
    ///
    /// Only the three onboarding routes belong to a pre-access stage; every
    /// other path in the app is gated behind [`OnboardingStage::Ready`].
    pub fn for_route(path: &str) -> Self {
        match path.trim_end_matches('/') {
            ROUTE_QUESTIONNAIRE => Self::Questionnaire,
            ROUTE_ASSESSMENT => Self::Assessment,
            ROUTE_NOT_READY => Self::NotReady,
            _ => Self::Ready,
        }
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// The subset of a user profile the gate looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub onboarding_completed_at: Option<Timestamp>,
    pub experience_level: Option<ExperienceLevel>,
    pub skill_floor_passed: Option<bool>,
    pub skill_floor_completed_at: Option<Timestamp>,
}

/// Resolve the onboarding stage for a profile.
///
/// `None` (no profile row yet) resolves the same as a profile whose
/// questionnaire has not been submitted.
pub fn resolve_stage(profile: Option<&ProfileSnapshot>) -> OnboardingStage {
    let Some(profile) = profile else {
        return OnboardingStage::Questionnaire;
    };

    if profile.onboarding_completed_at.is_none() {
        return OnboardingStage::Questionnaire;
    }

    let needs_floor = profile
        .experience_level
        .is_some_and(|level| level.requires_skill_floor());
    if !needs_floor {
        return OnboardingStage::Ready;
    }

    if profile.skill_floor_completed_at.is_none() {
        return OnboardingStage::Assessment;
    }

    if profile.skill_floor_passed == Some(false) {
        OnboardingStage::NotReady
    } else {
        OnboardingStage::Ready
    }
}

// ---------------------------------------------------------------------------
// Gate outcome and navigation
// ---------------------------------------------------------------------------

/// Result of evaluating the gate for a profile lookup.
///
/// `Unknown` means the profile could not be fetched for a reason other than
/// "not found". It is not the same thing as [`OnboardingStage::NotReady`]:
/// the gate fails open and lets the user through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Resolved(OnboardingStage),
    Unknown,
}

impl GateOutcome {
    /// Evaluate the gate from a profile lookup where `Ok(None)` means the
    /// profile does not exist.
    pub fn from_lookup<E>(lookup: Result<Option<ProfileSnapshot>, E>) -> Self {
        match lookup {
            Ok(profile) => Self::Resolved(resolve_stage(profile.as_ref())),
            Err(_) => Self::Unknown,
        }
    }

    /// The stage used for routing decisions.
    pub fn effective_stage(&self) -> OnboardingStage {
        match self {
            Self::Resolved(stage) => *stage,
            Self::Unknown => OnboardingStage::Ready,
        }
    }
}

/// What the client should do when it lands on a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render,
    Redirect(&'static str),
}

/// Decide whether `path` may render for the given gate outcome, or where to
/// send the user instead.
pub fn navigate(path: &str, outcome: GateOutcome) -> Navigation {
    let stage = outcome.effective_stage();
    if OnboardingStage::for_route(path) == stage {
        Navigation::Render
    } else {
        Navigation::Redirect(stage.route())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
