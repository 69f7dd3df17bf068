// file: src/extractor/mod.rs
// description: keyword matching and excerpt extraction module exports
// reference: internal module structure

pub mod keyword;
pub mod noise;
pub mod patterns;
pub mod relevance;

pub use keyword::KeywordMatcher;
pub use noise::NoiseClassifier;
pub use relevance::{Extraction, RelevanceExtractor};
