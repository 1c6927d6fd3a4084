// src/error.rs
//! Domain error type shared by the profile store, resume builder and analyzer

use thiserror::Error;

use crate::job_analysis::AnalysisInputKind;
use crate::types::profile::SkillCategory;
use crate::validation::ValidationErrors;

/// Failures surfaced to the user. Validation, empty analysis input and
/// duplicate skills are recoverable and leave stored state untouched.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("{}", .0.empty_message())]
    EmptyAnalysisInput(AnalysisInputKind),

    #[error("\"{name}\" already exists in {}", .category.label())]
    DuplicateSkill {
        name: String,
        category: SkillCategory,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationErrors> for AssistantError {
    fn from(errors: ValidationErrors) -> Self {
        AssistantError::Validation(errors)
    }
}

impl AssistantError {
    /// True for the failures a user fixes by correcting input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AssistantError::Validation(_)
                | AssistantError::EmptyAnalysisInput(_)
                | AssistantError::DuplicateSkill { .. }
                | AssistantError::NotFound(_)
        )
    }
}

pub type AssistantResult<T> = std::result::Result<T, AssistantError>;
