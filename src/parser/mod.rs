// file: src/parser/mod.rs
// description: text normalization and segmentation module exports
// reference: internal module structure

pub mod normalizer;
pub mod segmenter;

pub use normalizer::TextNormalizer;
pub use segmenter::{Segments, SentenceSegmenter};
