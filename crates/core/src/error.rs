#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// An assessment was submitted before onboarding was completed, or for a
    /// user with no profile at all. Both cases share this variant.
    #[error("Onboarding required: {0}")]
    OnboardingRequired(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
