use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Usage errors are kept apart from runtime failures so scripts can tell
/// a bad invocation from a failed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Query completed and the result was presented
    Success = 0,
    /// Application error (file I/O, network, malformed metadata, policy)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing or request validation)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Classifies an error returned by the CLI pipeline
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<QueryError>() {
            Some(QueryError::Validation { .. }) => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency queries.
///
/// Every failure of a query maps to exactly one variant; there is no
/// partial-result variant.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Failed to read dependency graph file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    GraphFileRead { path: PathBuf, details: String },

    #[error("Failed to fetch package metadata from {url}\nDetails: {details}\n\n💡 Hint: Please check your internet connection and that the package version exists")]
    MetadataFetch { url: String, details: String },

    #[error("Malformed package metadata received from {url}\nDetails: {details}")]
    MalformedResponse { url: String, details: String },

    #[error("Policy violation: {reason}\n\n💡 Hint: {hint}")]
    Policy { reason: String, hint: String },

    /// Rejected request parameters, raised before any graph is loaded
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
