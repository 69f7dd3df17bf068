// file: src/models/report.rs
// description: per-issue match records and the ordered run report
// reference: internal data structures

use crate::models::Issue;
use crate::utils::Validator;
use sha2::{Digest, Sha256};

/// Excerpts in order of appearance in the normalized text.
pub type ExcerptSet = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub issue: Issue,
    pub total_occurrences: usize,
    pub excerpts: ExcerptSet,
    /// Set when the excerpt is the fixed window around the first raw hit.
    pub used_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub keyword: String,
    pub records: Vec<MatchRecord>,
    pub grand_total_occurrences: usize,
    pub issues_scanned: usize,
}

impl Report {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            records: Vec::new(),
            grand_total_occurrences: 0,
            issues_scanned: 0,
        }
    }

    pub fn push(&mut self, record: MatchRecord) {
        self.grand_total_occurrences += record.total_occurrences;
        self.records.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn matched_count(&self) -> usize {
        self.records.len()
    }

    /// `(label, count)` pairs for the chart renderer, one per record.
    pub fn chart_series(&self, label_chars: usize) -> Vec<(String, usize)> {
        self.records
            .iter()
            .map(|record| {
                (
                    Validator::truncate_text(record.issue.title(), label_chars),
                    record.total_occurrences,
                )
            })
            .collect()
    }

    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.keyword.as_bytes());

        for record in &self.records {
            hasher.update([0u8]);
            hasher.update(record.issue.title().as_bytes());
            hasher.update(record.total_occurrences.to_le_bytes());
            for excerpt in &record.excerpts {
                hasher.update([b'\n']);
                hasher.update(excerpt.as_bytes());
            }
        }

        format!("{:x}", hasher.finalize())
    }
}
