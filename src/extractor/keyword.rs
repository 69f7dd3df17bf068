// file: src/extractor/keyword.rs
// description: case-insensitive literal phrase matching for the search keyword
// reference: https://docs.rs/regex/latest/regex/fn.escape.html

use crate::error::Result;
use crate::utils::Validator;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keyword: String,
    pattern: Regex,
}

impl KeywordMatcher {
    /// Builds a matcher for the trimmed keyword. Regex metacharacters in the
    /// keyword are escaped, so matching is plain substring search.
    pub fn new(keyword: &str) -> Result<Self> {
        let keyword = Validator::validate_keyword(Some(keyword))?;
        let pattern = RegexBuilder::new(&regex::escape(&keyword))
            .case_insensitive(true)
            .build()?;

        Ok(Self { keyword, pattern })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Non-overlapping occurrences, scanned left to right.
    pub fn count_all(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Byte offset of the first occurrence.
    pub fn first_offset(&self, text: &str) -> Option<usize> {
        self.pattern.find(text).map(|m| m.start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    #[test]
    fn test_count_is_case_insensitive() {
        let matcher = KeywordMatcher::new("timeout").unwrap();
        assert_eq!(matcher.count_all("Timeout, TIMEOUT and timeout"), 3);
        assert_eq!(matcher.count_all("no match here"), 0);
    }

    #[test]
    fn test_substring_semantics() {
        let matcher = KeywordMatcher::new("lock").unwrap();
        assert!(matcher.contains("poetry.lock is stale"));
        assert!(matcher.contains("Deadlocked resolver"));
        assert_eq!(matcher.count_all("lock lockfile unlock"), 3);
    }

    #[test]
    fn test_overlapping_occurrences_not_double_counted() {
        let matcher = KeywordMatcher::new("aa").unwrap();
        assert_eq!(matcher.count_all("aaaa"), 2);
        assert_eq!(matcher.count_all("aaa"), 1);
    }

    #[test]
    fn test_special_characters_are_literal() {
        let matcher = KeywordMatcher::new("c++ (beta)").unwrap();
        assert!(matcher.contains("Support for C++ (Beta) builds"));
        assert!(!matcher.contains("support for c builds"));

        let dot = KeywordMatcher::new("1.0").unwrap();
        assert!(!dot.contains("version 1x0"));
    }

    #[test]
    fn test_keyword_is_trimmed() {
        let matcher = KeywordMatcher::new("  dependency group ").unwrap();
        assert_eq!(matcher.keyword(), "dependency group");
        assert!(matcher.contains("The Dependency Group was ignored"));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        assert!(matches!(
            KeywordMatcher::new("   "),
            Err(AnalysisError::MissingKeyword)
        ));
    }

    #[test]
    fn test_first_offset() {
        let matcher = KeywordMatcher::new("cache").unwrap();
        assert_eq!(matcher.first_offset("clear the CACHE then cache again"), Some(10));
        assert_eq!(matcher.first_offset("nothing"), None);
    }
}
