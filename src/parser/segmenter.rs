// file: src/parser/segmenter.rs
// description: Sentence-like unit segmentation on punctuation and line breaks
// reference: https://docs.rs/regex

use crate::extractor::patterns::SENTENCE_BOUNDARY;
use regex::CaptureMatches;

pub struct SentenceSegmenter;

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Splits after `.`, `!`, `?`, `;` or `:` followed by whitespace, and on
    /// runs of newlines. Units are trimmed and empty ones skipped.
    pub fn segment<'t>(&self, text: &'t str) -> Segments<'t> {
        Segments {
            text,
            boundaries: SENTENCE_BOUNDARY.captures_iter(text),
            cursor: 0,
            finished: false,
        }
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-pass iterator over the units of one text.
pub struct Segments<'t> {
    text: &'t str,
    boundaries: CaptureMatches<'static, 't>,
    cursor: usize,
    finished: bool,
}

impl<'t> Iterator for Segments<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let (end, resume) = match self.boundaries.next() {
                Some(caps) => {
                    let Some(whole) = caps.get(0) else {
                        continue;
                    };
                    let end = caps.get(1).map_or(whole.start(), |punct| punct.end());
                    (end, whole.end())
                }
                None => {
                    self.finished = true;
                    (self.text.len(), self.text.len())
                }
            };

            let unit = self.text[self.cursor..end].trim();
            self.cursor = resume;

            if !unit.is_empty() {
                return Some(unit);
            }
        }

        None
    }
}
