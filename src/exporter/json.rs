// file: src/exporter/json.rs
// description: json export of keyword analysis reports

use crate::error::{AnalysisError, Result};
use crate::models::{MatchRecord, Report};
use chrono::Utc;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportedRecord<'a> {
    pub number: Option<u64>,
    pub title: &'a str,
    pub state: Option<&'a str>,
    pub url: Option<&'a str>,
    pub occurrences: usize,
    pub excerpts: &'a [String],
    pub fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportedReport<'a> {
    pub exported_at: String,
    pub keyword: &'a str,
    pub fingerprint: String,
    pub total_occurrences: usize,
    pub matched_issues: usize,
    pub issues_scanned: usize,
    pub records: Vec<ExportedRecord<'a>>,
}

impl<'a> From<&'a MatchRecord> for ExportedRecord<'a> {
    fn from(record: &'a MatchRecord) -> Self {
        Self {
            number: record.issue.number,
            title: record.issue.title(),
            state: record.issue.state.as_deref(),
            url: record.issue.url.as_deref(),
            occurrences: record.total_occurrences,
            excerpts: &record.excerpts,
            fallback: record.used_fallback,
        }
    }
}

impl<'a> ExportedReport<'a> {
    pub fn from_report(report: &'a Report) -> Self {
        Self {
            exported_at: Utc::now().to_rfc3339(),
            keyword: &report.keyword,
            fingerprint: report.fingerprint(),
            total_occurrences: report.grand_total_occurrences,
            matched_issues: report.matched_count(),
            issues_scanned: report.issues_scanned,
            records: report.records.iter().map(ExportedRecord::from).collect(),
        }
    }
}

impl JsonExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub async fn export(&self, report: &Report, pretty: bool) -> Result<PathBuf> {
        let exported = ExportedReport::from_report(report);
        let body = if pretty {
            serde_json::to_string_pretty(&exported)?
        } else {
            serde_json::to_string(&exported)?
        };

        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| AnalysisError::FileOperation {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&self.output_path, body)
            .await
            .map_err(|source| AnalysisError::FileOperation {
                path: self.output_path.clone(),
                source,
            })?;

        info!(
            "Exported {} records to {}",
            exported.matched_issues,
            self.output_path.display()
        );
        Ok(self.output_path.clone())
    }
}
