// file: src/exporter/publish.rs
// description: writes a finished report to every configured sink
// reference: results file, json export and terminal chart

use crate::config::OutputConfig;
use crate::error::Result;
use crate::exporter::{BarChart, JsonExporter, TextReportWriter};
use crate::models::Report;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct PublishOptions {
    pub results_path: PathBuf,
    pub json_path: Option<PathBuf>,
    pub pretty: bool,
    pub show_chart: bool,
    pub chart_width: usize,
    pub chart_label_chars: usize,
}

impl PublishOptions {
    pub fn from_config(output: &OutputConfig) -> Self {
        Self {
            results_path: output.results_path.clone(),
            json_path: output.json_path.clone(),
            pretty: false,
            show_chart: output.show_chart,
            chart_width: output.chart_width,
            chart_label_chars: output.chart_label_chars,
        }
    }
}

/// Where a published report ended up.
#[derive(Debug, Clone, Default)]
pub struct Published {
    pub results_path: PathBuf,
    pub json_path: Option<PathBuf>,
    pub chart: Option<String>,
}

/// Writes the results file, the optional json export and renders the chart.
///
/// An empty report touches no sink and yields `None`.
pub async fn publish(report: &Report, options: &PublishOptions) -> Result<Option<Published>> {
    if report.is_empty() {
        info!("No issues matched '{}', nothing to publish", report.keyword);
        return Ok(None);
    }

    let results_path = TextReportWriter::new(&options.results_path)
        .write(report)
        .await?;

    let json_path = match &options.json_path {
        Some(path) => Some(JsonExporter::new(path).export(report, options.pretty).await?),
        None => None,
    };

    let chart = options.show_chart.then(|| {
        BarChart::new(options.chart_width).render(
            &format!("Occurrences of '{}' in matched issues", report.keyword),
            "Number of keyword matches",
            &report.chart_series(options.chart_label_chars),
        )
    });

    Ok(Some(Published {
        results_path,
        json_path,
        chart,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{Issue, MatchRecord};
    use tempfile::TempDir;

    fn options(dir: &TempDir) -> PublishOptions {
        PublishOptions {
            results_path: dir.path().join("results.txt"),
            json_path: Some(dir.path().join("report.json")),
            pretty: true,
            show_chart: true,
            chart_width: 10,
            chart_label_chars: 60,
        }
    }

    #[tokio::test]
    async fn test_empty_report_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let options = options(&dir);
        let mut report = Report::new("timeout");
        report.issues_scanned = 4;

        let published = publish(&report, &options).await.unwrap();

        assert!(published.is_none());
        assert!(!options.results_path.exists());
        assert!(!dir.path().join("report.json").exists());
    }

    #[tokio::test]
    async fn test_matched_report_reaches_every_sink() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let options = options(&dir);
        let mut report = Report::new("timeout");
        report.push(MatchRecord {
            issue: Issue::new("Build fails", "hit a timeout"),
            total_occurrences: 1,
            excerpts: vec!["hit a timeout".to_string()],
            used_fallback: false,
        });

        let published = publish(&report, &options).await.unwrap().unwrap();

        assert!(published.results_path.exists());
        assert!(
            std::fs::read_to_string(&published.results_path)
                .unwrap()
                .contains("Build fails")
        );
        assert!(published.json_path.unwrap().exists());
        assert!(published.chart.unwrap().contains("Build fails"));
    }

    #[test]
    fn test_options_follow_output_config() {
        let config = Config::default_config();
        let options = PublishOptions::from_config(&config.output);

        assert_eq!(options.results_path, config.output.results_path);
        assert!(options.json_path.is_none());
        assert!(options.show_chart);
        assert!(!options.pretty);
    }
}
