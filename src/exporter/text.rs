// file: src/exporter/text.rs
// description: human-readable report rendering for the console and the results file

use crate::error::{AnalysisError, Result};
use crate::models::Report;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextLayout {
    /// Titles prefixed with a bullet.
    Console,
    File,
}

#[derive(Debug, Clone)]
pub struct TextReportWriter {
    output_path: PathBuf,
}

impl TextReportWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn render(report: &Report, layout: TextLayout) -> String {
        let mut out = String::new();

        for record in &report.records {
            let _ = match layout {
                TextLayout::Console => writeln!(out, "• {}", record.issue.title()),
                TextLayout::File => writeln!(out, "{}", record.issue.title()),
            };
            for excerpt in &record.excerpts {
                let _ = writeln!(out, "   → {}", excerpt);
            }
            let _ = writeln!(
                out,
                "   [Matches in this issue: {}]\n",
                record.total_occurrences
            );
        }

        out
    }

    pub fn summary_line(report: &Report) -> String {
        format!(
            "Keyword '{}' appeared {} times across {} issues.",
            report.keyword,
            report.grand_total_occurrences,
            report.matched_count()
        )
    }

    /// Writes the file layout and returns the absolute output path.
    pub async fn write(&self, report: &Report) -> Result<PathBuf> {
        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.file_error(source))?;
        }

        tokio::fs::write(&self.output_path, Self::render(report, TextLayout::File))
            .await
            .map_err(|source| self.file_error(source))?;

        let absolute = tokio::fs::canonicalize(&self.output_path)
            .await
            .map_err(|source| self.file_error(source))?;

        info!("Wrote {} records to {}", report.matched_count(), absolute.display());
        Ok(absolute)
    }

    fn file_error(&self, source: std::io::Error) -> AnalysisError {
        AnalysisError::FileOperation {
            path: self.output_path.clone(),
            source,
        }
    }
}
