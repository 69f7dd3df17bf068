// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

pub const KEYWORD_USAGE: &str = "issue_keywords keyword --keyword <word or phrase>";

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("The '--keyword' parameter is required for this analysis.\nUsage: {}", KEYWORD_USAGE)]
    MissingKeyword,

    #[error("Failed to load issues from {path}: {message}")]
    Load { path: PathBuf, message: String },

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keyword_carries_usage() {
        let message = AnalysisError::MissingKeyword.to_string();
        assert!(message.contains("--keyword"));
        assert!(message.contains(KEYWORD_USAGE));
    }

    #[test]
    fn test_load_error_names_path() {
        let err = AnalysisError::Load {
            path: PathBuf::from("data/issues.json"),
            message: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load issues from data/issues.json: expected value"
        );
    }
}
