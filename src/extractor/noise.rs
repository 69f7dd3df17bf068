// file: src/extractor/noise.rs
// description: classification of log, traceback and code fragments as non-prose noise
// reference: https://docs.rs/regex/latest/regex/struct.RegexSet.html

use crate::extractor::patterns::{NOISE_SET, NOISE_SIGNATURES};

pub struct NoiseClassifier;

impl NoiseClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn is_noise(&self, unit: &str) -> bool {
        NOISE_SET.is_match(unit)
    }

    /// Names of every signature the unit trips, in table order.
    pub fn matched_signatures(&self, unit: &str) -> Vec<&'static str> {
        NOISE_SET
            .matches(unit)
            .into_iter()
            .map(|idx| NOISE_SIGNATURES[idx].0)
            .collect()
    }
}

impl Default for NoiseClassifier {
    fn default() -> Self {
        Self::new()
    }
}
