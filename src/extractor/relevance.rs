// file: src/extractor/relevance.rs
// description: keyword-bearing excerpt extraction from issue title and body
// reference: sentence-level evidence extraction

use crate::config::AnalysisConfig;
use crate::extractor::keyword::KeywordMatcher;
use crate::extractor::noise::NoiseClassifier;
use crate::models::{ExcerptSet, Issue};
use crate::parser::{SentenceSegmenter, TextNormalizer};
use crate::utils::Validator;
use tracing::{debug, trace};

pub const DEFAULT_MAX_EXCERPT_CHARS: usize = 250;
pub const DEFAULT_SNIPPET_RADIUS: usize = 80;

/// Outcome of running one issue through the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub total_occurrences: usize,
    pub excerpts: ExcerptSet,
    pub used_fallback: bool,
}

impl Extraction {
    pub fn is_match(&self) -> bool {
        self.total_occurrences > 0
    }
}

pub struct RelevanceExtractor {
    normalizer: TextNormalizer,
    segmenter: SentenceSegmenter,
    classifier: NoiseClassifier,
    max_excerpt_chars: usize,
    snippet_radius: usize,
}

impl RelevanceExtractor {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_EXCERPT_CHARS, DEFAULT_SNIPPET_RADIUS)
    }

    pub fn with_limits(max_excerpt_chars: usize, snippet_radius: usize) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            segmenter: SentenceSegmenter::new(),
            classifier: NoiseClassifier::new(),
            max_excerpt_chars,
            snippet_radius,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::with_limits(config.max_excerpt_chars, config.snippet_radius)
    }

    /// Counts raw occurrences over `title + ". " + body` and, for a match,
    /// collects every keyword-bearing unit of the normalized text.
    ///
    /// Counting runs before code fences are stripped, so a keyword that only
    /// appears inside a fence is counted but yields no unit. The fallback
    /// window over the raw text covers that case.
    pub fn extract(&self, issue: &Issue, matcher: &KeywordMatcher) -> Extraction {
        let full_text = issue.full_text();

        let total_occurrences = matcher.count_all(&full_text);
        if total_occurrences == 0 {
            return Extraction::default();
        }

        let normalized = self.normalizer.normalize(&full_text);
        let mut excerpts = ExcerptSet::new();

        for unit in self.segmenter.segment(&normalized) {
            if matcher.contains(unit) {
                excerpts.push(Validator::truncate_text(unit, self.max_excerpt_chars));
            } else if self.classifier.is_noise(unit) {
                trace!(
                    signatures = ?self.classifier.matched_signatures(unit),
                    "Dropping noise unit"
                );
            }
        }

        let used_fallback = excerpts.is_empty();
        if used_fallback {
            debug!(
                "No keyword-bearing sentence in '{}', using fallback snippet",
                issue.title()
            );
            excerpts.push(self.fallback_snippet(&full_text, matcher));
        }

        Extraction {
            total_occurrences,
            excerpts,
            used_fallback,
        }
    }

    /// Window of `snippet_radius` chars either side of the first occurrence
    /// start, clamped to the text.
    fn fallback_snippet(&self, full_text: &str, matcher: &KeywordMatcher) -> String {
        let offset = matcher.first_offset(full_text).unwrap_or(0);
        let hit = full_text[..offset].chars().count();
        let start = hit.saturating_sub(self.snippet_radius);
        let end = hit.saturating_add(self.snippet_radius);

        full_text
            .chars()
            .skip(start)
            .take(end - start)
            .collect::<String>()
            .trim()
            .to_string()
    }
}

impl Default for RelevanceExtractor {
    fn default() -> Self {
        Self::new()
    }
}
