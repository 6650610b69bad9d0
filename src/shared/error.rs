use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI jobs use these to tell "metadata would change" apart from real failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - rules applied, or nothing to rewrite
    Success = 0,
    /// `--check` found metadata that the rules would rewrite
    RewritesPending = 1,
    /// Invalid command-line arguments (clap parsing errors, conflicting options)
    InvalidArguments = 2,
    /// Application error (file I/O, parse failure, invalid config, etc.)
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
            ExitCode::RewritesPending => write!(f, "Rewrites Pending (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors.
///
/// The rewrite rules themselves never fail; these cover everything around them.
#[derive(Debug, Error)]
pub enum MetadataRuleError {
    #[error("Module metadata file not found: {path}\n\n💡 Hint: Pass the path of a published .module file")]
    MetadataFileNotFound { path: PathBuf },

    #[error("Failed to parse module metadata: {path}\nDetails: {details}\n\n💡 Hint: Only Gradle Module Metadata JSON (formatVersion 1.x) is supported")]
    MetadataParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid module selector '{selector}': {reason}\n\n💡 Hint: Use GROUP:MODULE or GROUP:MODULE:VERSION (e.g. junit:junit)")]
    InvalidSelector { selector: String, reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
