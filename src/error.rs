//! Error types.

use crate::validation::ValidationError;

/// Result type for optimizer operations.
pub type TaktResult<T> = Result<T, TaktError>;

/// Errors surfaced to the caller of the optimizer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaktError {
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    #[error("Invalid project: {} issue(s), first: {}", .0.len(), first_message(.0))]
    InvalidProject(Vec<ValidationError>),

    #[error("Population is empty; nothing to select from")]
    EmptyPopulation,
}

impl TaktError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("")
}
