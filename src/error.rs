//! Error types for the proposal-gen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for proposal generation.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum ProposalError {
    /// Invalid configuration or content file.
    #[error("{0}")]
    UserError(String),

    /// A template file is missing or unreadable.
    #[error("Input not found: {0}")]
    InputNotFound(String),

    /// An output file could not be written.
    #[error("Write failed: {0}")]
    WriteError(String),

    /// The assembled document is structurally invalid.
    #[error("Invalid document: {0}")]
    Document(String),

    /// At least one template in a batch failed to generate.
    #[error("{failed} of {total} outputs failed to generate")]
    GenerationFailed { failed: usize, total: usize },

    /// A required capability was not compiled into this binary.
    #[error("Dependency missing: {0}")]
    DependencyMissing(String),
}

impl ProposalError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProposalError::UserError(_) => exit_codes::USER_ERROR,
            ProposalError::Document(_) => exit_codes::USER_ERROR,
            ProposalError::InputNotFound(_) => exit_codes::GENERATION_FAILURE,
            ProposalError::GenerationFailed { .. } => exit_codes::GENERATION_FAILURE,
            ProposalError::WriteError(_) => exit_codes::WRITE_FAILURE,
            ProposalError::DependencyMissing(_) => exit_codes::DEPENDENCY_MISSING,
        }
    }
}

/// Result type alias for proposal-gen operations.
pub type Result<T> = std::result::Result<T, ProposalError>;
