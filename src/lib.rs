// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod repository;
pub mod utils;

pub use config::{AnalysisConfig, Config, DataConfig, OutputConfig};
pub use error::{AnalysisError, Result};
pub use exporter::{
    BarChart, JsonExporter, PublishOptions, Published, TextLayout, TextReportWriter, publish,
};
pub use extractor::{Extraction, KeywordMatcher, NoiseClassifier, RelevanceExtractor};
pub use models::{ExcerptSet, Issue, MatchRecord, Report};
pub use parser::{SentenceSegmenter, TextNormalizer};
pub use pipeline::{AnalysisStats, ProgressTracker, ResultAggregator};
pub use repository::IssueLoader;
pub use utils::Validator;

/// Runs the keyword analysis over an in-memory issue collection.
pub fn analyze(issues: &[Issue], keyword: &str, config: &AnalysisConfig) -> Result<Report> {
    let matcher = KeywordMatcher::new(keyword)?;
    let aggregator = ResultAggregator::new(RelevanceExtractor::from_config(config));
    Ok(aggregator.aggregate(issues, &matcher))
}
