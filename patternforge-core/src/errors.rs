//! errors.rs - Custom error types for the patternforge-core library.
//!
//! Compilation is permissive: configurations are never rejected on semantic
//! grounds. The only failure `compile` can report is the matching engine
//! refusing the assembled pattern text.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `patternforge-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream `match` expressions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternError {
    /// The assembled pattern text was rejected by the matching engine.
    #[error("Failed to compile pattern '{pattern}': {message}")]
    Compilation {
        /// The full pattern text handed to the engine.
        pattern: String,
        /// The engine's diagnostic.
        message: String,
    },

    /// The backtracking engine gave up while matching (e.g. backtrack limit).
    #[error("Pattern matching failed: {0}")]
    MatchExecution(String),
}

/// The error `compile` surfaces when the engine rejects a pattern.
pub type PatternCompilationError = PatternError;

impl PatternError {
    pub(crate) fn compilation(pattern: &str, message: impl ToString) -> Self {
        PatternError::Compilation {
            pattern: pattern.to_string(),
            message: message.to_string(),
        }
    }

    /// Returns the engine diagnostic, if this is a compilation failure.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            PatternError::Compilation { message, .. } => Some(message),
            PatternError::MatchExecution(_) => None,
        }
    }
}
