// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for keyword analysis runs
// reference: uses indicatif for progress bars and tracks extraction metrics

use crate::extractor::Extraction;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct AnalysisStats {
    pub issues_scanned: usize,
    pub issues_matched: usize,
    pub total_occurrences: usize,
    pub fallback_snippets: usize,
    pub duration_secs: f64,
}

impl AnalysisStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn match_rate(&self) -> f64 {
        if self.issues_scanned == 0 {
            return 0.0;
        }
        (self.issues_matched as f64 / self.issues_scanned as f64) * 100.0
    }

    pub fn occurrences_per_match(&self) -> f64 {
        if self.issues_matched == 0 {
            return 0.0;
        }
        self.total_occurrences as f64 / self.issues_matched as f64
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    issues_scanned: AtomicUsize,
    issues_matched: AtomicUsize,
    total_occurrences: AtomicUsize,
    fallback_snippets: AtomicUsize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_issues: usize, colored: bool) -> Self {
        Self::from_bar(create_progress_bar(total_issues as u64, colored))
    }

    /// Tracker that counts but never draws.
    pub fn hidden() -> Self {
        Self::from_bar(ProgressBar::hidden())
    }

    fn from_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            issues_scanned: AtomicUsize::new(0),
            issues_matched: AtomicUsize::new(0),
            total_occurrences: AtomicUsize::new(0),
            fallback_snippets: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record(&self, extraction: &Extraction) {
        self.issues_scanned.fetch_add(1, Ordering::SeqCst);

        if extraction.is_match() {
            self.issues_matched.fetch_add(1, Ordering::SeqCst);
            self.total_occurrences
                .fetch_add(extraction.total_occurrences, Ordering::SeqCst);
        }

        if extraction.used_fallback {
            self.fallback_snippets.fetch_add(1, Ordering::SeqCst);
        }

        self.bar.inc(1);
        self.update_message();
    }

    pub fn finish(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }

    pub fn get_stats(&self) -> AnalysisStats {
        AnalysisStats {
            issues_scanned: self.issues_scanned.load(Ordering::SeqCst),
            issues_matched: self.issues_matched.load(Ordering::SeqCst),
            total_occurrences: self.total_occurrences.load(Ordering::SeqCst),
            fallback_snippets: self.fallback_snippets.load(Ordering::SeqCst),
            duration_secs: self.start_time.elapsed().as_secs_f64(),
        }
    }

    fn update_message(&self) {
        let matched = self.issues_matched.load(Ordering::SeqCst);
        let occurrences = self.total_occurrences.load(Ordering::SeqCst);

        self.bar
            .set_message(format!("Matched: {} | Occurrences: {}", matched, occurrences));
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };

    match ProgressStyle::default_bar().template(template) {
        Ok(style) => bar.set_style(style.progress_chars(if colored { "█▓▒░" } else { "=>-" })),
        Err(_) => bar.set_style(ProgressStyle::default_bar()),
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(count: usize, fallback: bool) -> Extraction {
        Extraction {
            total_occurrences: count,
            excerpts: vec!["excerpt".to_string()],
            used_fallback: fallback,
        }
    }

    #[test]
    fn test_analysis_stats_calculations() {
        let mut stats = AnalysisStats::new();
        stats.issues_scanned = 40;
        stats.issues_matched = 10;
        stats.total_occurrences = 25;

        assert_eq!(stats.match_rate(), 25.0);
        assert_eq!(stats.occurrences_per_match(), 2.5);
    }

    #[test]
    fn test_analysis_stats_empty() {
        let stats = AnalysisStats::new();
        assert_eq!(stats.match_rate(), 0.0);
        assert_eq!(stats.occurrences_per_match(), 0.0);
    }

    #[test]
    fn test_progress_tracker_records_extractions() {
        let tracker = ProgressTracker::hidden();

        tracker.record(&matched(3, false));
        tracker.record(&Extraction::default());
        tracker.record(&matched(1, true));

        let stats = tracker.get_stats();
        assert_eq!(stats.issues_scanned, 3);
        assert_eq!(stats.issues_matched, 2);
        assert_eq!(stats.total_occurrences, 4);
        assert_eq!(stats.fallback_snippets, 1);
    }
}
