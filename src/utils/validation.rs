// file: src/utils/validation.rs
// description: input validation and text truncation helpers
// reference: input validation patterns

use crate::error::{AnalysisError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    /// Trims the keyword and rejects a missing or blank value.
    pub fn validate_keyword(keyword: Option<&str>) -> Result<String> {
        match keyword.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
            _ => Err(AnalysisError::MissingKeyword),
        }
    }

    pub fn validate_input_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(AnalysisError::Validation(format!(
                "Input path does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() && !path.is_dir() {
            return Err(AnalysisError::Validation(format!(
                "Input path is neither a file nor a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_json_extension(path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(()),
            _ => Err(AnalysisError::Validation(format!(
                "File is not a json file: {}",
                path.display()
            ))),
        }
    }

    /// Keeps the first `max_chars` characters and appends `...` when
    /// anything was cut. Counts chars, not bytes.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            None => text.to_string(),
            Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_keyword() {
        assert_eq!(
            Validator::validate_keyword(Some("  timeout ")).unwrap(),
            "timeout"
        );
        assert!(matches!(
            Validator::validate_keyword(Some("   ")),
            Err(AnalysisError::MissingKeyword)
        ));
        assert!(matches!(
            Validator::validate_keyword(None),
            Err(AnalysisError::MissingKeyword)
        ));
    }

    #[test]
    fn test_validate_input_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("issues.json");
        fs::write(&file_path, "[]").unwrap();

        assert!(Validator::validate_input_path(&file_path).is_ok());
        assert!(Validator::validate_input_path(temp.path()).is_ok());
        assert!(Validator::validate_input_path(Path::new("/nonexistent/issues.json")).is_err());
    }

    #[test]
    fn test_validate_json_extension() {
        assert!(Validator::validate_json_extension(Path::new("issues.json")).is_ok());
        assert!(Validator::validate_json_extension(Path::new("issues.txt")).is_err());
        assert!(Validator::validate_json_extension(Path::new("issues")).is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(Validator::truncate_text("exactly10!", 10), "exactly10!");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
    }

    #[test]
    fn test_truncate_text_counts_chars() {
        let text = "é".repeat(12);
        let truncated = Validator::truncate_text(&text, 10);
        assert_eq!(truncated, format!("{}...", "é".repeat(10)));
    }
}
