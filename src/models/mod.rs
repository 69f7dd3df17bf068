// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod issue;
pub mod report;

pub use issue::Issue;
pub use report::{ExcerptSet, MatchRecord, Report};
