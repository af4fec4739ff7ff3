use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish an audit that found
/// failing checks from a run that could not complete at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - audit completed (and no failures, when failures are gated)
    Success = 0,
    /// At least one check failed and `--fail-on-failures` was given
    FailuresDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (snapshot, network, store or file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::FailuresDetected => write!(f, "Failures Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for page audits.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Page snapshot not found: {path}\n\n💡 Hint: {suggestion}")]
    SnapshotNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse page snapshot: {path}\nDetails: {details}\n\n💡 Hint: The snapshot must be the JSON document captured from the inspected page")]
    SnapshotParseError { path: PathBuf, details: String },

    #[error("No visible components could be extracted from {url}\n\n💡 Hint: Make sure the page contains visible forms, fieldsets or form groups")]
    NoComponents { url: String },

    #[error("No results available for export\n\n💡 Hint: Run the tests first (form-audit run <SNAPSHOT>)")]
    NoCurrentReport,

    #[error("Unsupported export format: {format}\n\n💡 Hint: Use one of json, csv, html or pdf")]
    UnsupportedFormat { format: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Result store error: {path}\nDetails: {details}\n\n💡 Hint: Remove or fix the stored results file and run the tests again")]
    StoreError { path: PathBuf, details: String },

    #[error("Failed to open the print viewer\nDetails: {details}\n\n💡 Hint: Export as html instead and print it from your browser")]
    PrintError { details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
