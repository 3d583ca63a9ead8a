//! Error types for reversible variables
//!
//! There is a single failure mode: un-assigning a variable whose history holds
//! nothing but the construction sentinel. Every other operation is total.

use thiserror::Error;

/// Errors raised by history operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// No delta remains beyond the sentinel, so there is nothing to undo
    #[error("history underflow: '{name}' has no assignment left to undo")]
    Underflow { name: String },
}

impl HistoryError {
    /// Name of the variable that refused the operation
    pub fn variable(&self) -> &str {
        match self {
            HistoryError::Underflow { name } => name,
        }
    }
}
