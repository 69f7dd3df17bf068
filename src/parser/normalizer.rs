// file: src/parser/normalizer.rs
// description: Issue text normalization ahead of sentence segmentation
// reference: Markdown fenced code block syntax

use crate::extractor::patterns::{CODE_FENCE, WHITESPACE_RUN};

pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Removes fenced code blocks, trims, then collapses any run of two or
    /// more whitespace characters into a single space.
    pub fn normalize(&self, content: &str) -> String {
        let without_code = self.strip_code_blocks(content);
        self.collapse_whitespace(without_code.trim())
    }

    fn strip_code_blocks(&self, content: &str) -> String {
        CODE_FENCE.replace_all(content, "").into_owned()
    }

    fn collapse_whitespace(&self, content: &str) -> String {
        WHITESPACE_RUN.replace_all(content, " ").into_owned()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
