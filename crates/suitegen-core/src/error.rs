//! Unified error handling for suitegen core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for suitegen core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuitegenError {
    /// Errors from the domain layer (normalization rejections).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration / port failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl SuitegenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::UnknownValue => ErrorCategory::UnknownValue,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    UnknownValue,
    Internal,
}

/// Convenient result type alias.
pub type SuitegenResult<T> = Result<T, SuitegenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_suggestions() {
        let err: SuitegenError = DomainError::UnknownModule("bogus".into()).into();
        assert!(err.suggestions().iter().any(|s| s.contains("N/")));
        assert_eq!(err.category(), ErrorCategory::UnknownValue);
    }

    #[test]
    fn application_errors_keep_their_category() {
        let err: SuitegenError = ApplicationError::FileExists {
            path: "basic.js".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
