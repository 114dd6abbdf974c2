//! Domain-layer errors.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may report and re-wrap)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An answer named a value outside the question's closed choice set.
    #[error("'{value}' is not a valid answer for question '{question}'")]
    UnknownChoice {
        question: &'static str,
        value: String,
    },

    /// A question of the plan received no answer.
    #[error("question '{question}' was not answered")]
    MissingAnswer { question: &'static str },

    /// An answer's kind does not match the question's kind.
    #[error("answer for question '{question}' must be a {expected} value")]
    AnswerKindMismatch {
        question: &'static str,
        expected: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownChoice { question, value } => vec![
                format!("'{value}' is not an option for '{question}'"),
                "Valid frameworks: react, angular".into(),
            ],
            Self::MissingAnswer { question } => vec![
                format!("The '{question}' question must be answered"),
                "Run again and answer every prompt, or pass --defaults".into(),
            ],
            Self::AnswerKindMismatch { .. } => vec![
                "An answer arrived with the wrong type".into(),
                "This usually indicates a broken scripted answer source".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownChoice { .. } | Self::MissingAnswer { .. } => ErrorCategory::Validation,
            Self::AnswerKindMismatch { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
