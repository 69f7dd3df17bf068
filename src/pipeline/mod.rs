// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod aggregator;
mod progress;

pub use aggregator::ResultAggregator;
pub use progress::{AnalysisStats, ProgressTracker};
