//! Centralized error types for preflight
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use thiserror::Error;

/// Fatal precondition failures. Any of these aborts the run with exit code 1
/// before the report is printed.
#[derive(Error, Debug)]
pub enum PreflightError {
    #[error("Migrations directory not found: {path}")]
    MissingDirectory { path: String },

    #[error("Missing migration files: {}", files.join(", "))]
    MissingFiles { files: Vec<String> },

    #[error("Project URL is empty. Set --project-url or SUPABASE_URL")]
    MissingProjectUrl,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required configuration missing: {field}")]
    MissingField { field: String },

    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Migration sequence is not contiguous: expected {expected}, found {found}")]
    NonContiguousSequence { expected: u32, found: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_display() {
        let err = PreflightError::MissingFiles {
            files: vec!["001_a.sql".to_string(), "002_b.sql".to_string()],
        };
        assert!(err.to_string().contains("001_a.sql, 002_b.sql"));
    }

    #[test]
    fn test_error_conversion() {
        let config_err = ConfigError::MissingField {
            field: "migrations_dir".to_string(),
        };
        let preflight_err: PreflightError = config_err.into();
        assert!(matches!(preflight_err, PreflightError::Config(_)));
    }
}
