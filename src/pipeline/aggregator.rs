// file: src/pipeline/aggregator.rs
// description: ordered aggregation of per-issue extractions into a run report
// reference: pipeline orchestration

use crate::extractor::{KeywordMatcher, RelevanceExtractor};
use crate::models::{Issue, MatchRecord, Report};
use crate::pipeline::progress::ProgressTracker;
use tracing::{debug, info};

pub struct ResultAggregator {
    extractor: RelevanceExtractor,
}

impl ResultAggregator {
    pub fn new(extractor: RelevanceExtractor) -> Self {
        Self { extractor }
    }

    pub fn aggregate(&self, issues: &[Issue], matcher: &KeywordMatcher) -> Report {
        self.aggregate_with_progress(issues, matcher, &ProgressTracker::hidden())
    }

    /// Records keep the traversal order of `issues`; nothing is sorted.
    pub fn aggregate_with_progress(
        &self,
        issues: &[Issue],
        matcher: &KeywordMatcher,
        tracker: &ProgressTracker,
    ) -> Report {
        let mut report = Report::new(matcher.keyword());

        for issue in issues {
            let extraction = self.extractor.extract(issue, matcher);
            tracker.record(&extraction);
            report.issues_scanned += 1;

            if !extraction.is_match() {
                continue;
            }

            debug!(
                "Matched '{}' ({} occurrences, {} excerpts)",
                issue.title(),
                extraction.total_occurrences,
                extraction.excerpts.len()
            );

            report.push(MatchRecord {
                issue: issue.clone(),
                total_occurrences: extraction.total_occurrences,
                excerpts: extraction.excerpts,
                used_fallback: extraction.used_fallback,
            });
        }

        tracker.finish();
        info!(
            "Aggregated {} matching issues out of {} ({} occurrences)",
            report.matched_count(),
            report.issues_scanned,
            report.grand_total_occurrences
        );

        report
    }
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new(RelevanceExtractor::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn corpus() -> Vec<Issue> {
        vec![
            Issue::new("Timeout on install", "Install hangs until a timeout.").with_number(1),
            Issue::new("Docs typo", "The README has a typo.").with_number(2),
            Issue::new("Lock slow", "Locking takes ages, then TIMEOUT.").with_number(3),
            Issue::new("Fenced", "See:\n```raise Timeout()```").with_number(4),
        ]
    }

    #[test]
    fn test_aggregate_skips_non_matching_and_preserves_order() {
        let matcher = KeywordMatcher::new("timeout").unwrap();
        let report = ResultAggregator::default().aggregate(&corpus(), &matcher);

        let numbers: Vec<_> = report.records.iter().map(|r| r.issue.number).collect();
        assert_eq!(numbers, vec![Some(1), Some(3), Some(4)]);
        assert_eq!(report.issues_scanned, 4);
        assert_eq!(report.keyword, "timeout");
    }

    #[test]
    fn test_grand_total_is_sum_of_records() {
        let matcher = KeywordMatcher::new("timeout").unwrap();
        let report = ResultAggregator::default().aggregate(&corpus(), &matcher);

        let sum: usize = report.records.iter().map(|r| r.total_occurrences).sum();
        assert_eq!(report.grand_total_occurrences, sum);
        assert_eq!(report.grand_total_occurrences, 4);
    }

    #[test]
    fn test_every_record_has_excerpts() {
        let matcher = KeywordMatcher::new("timeout").unwrap();
        let report = ResultAggregator::default().aggregate(&corpus(), &matcher);

        assert!(report.records.iter().all(|r| !r.excerpts.is_empty()));
        assert!(report.records[2].used_fallback);
        assert!(!report.records[0].used_fallback);
    }

    #[test]
    fn test_rerun_is_identical() {
        let matcher = KeywordMatcher::new("timeout").unwrap();
        let aggregator = ResultAggregator::default();

        let first = aggregator.aggregate(&corpus(), &matcher);
        let second = aggregator.aggregate(&corpus(), &matcher);

        assert_eq!(first, second);
        assert_eq!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn test_no_matches_yields_empty_report() {
        let matcher = KeywordMatcher::new("segfault").unwrap();
        let report = ResultAggregator::default().aggregate(&corpus(), &matcher);

        assert!(report.is_empty());
        assert_eq!(report.grand_total_occurrences, 0);
        assert_eq!(report.issues_scanned, 4);
    }

    #[test]
    fn test_progress_tracker_sees_every_issue() {
        let matcher = KeywordMatcher::new("timeout").unwrap();
        let tracker = ProgressTracker::hidden();
        ResultAggregator::default().aggregate_with_progress(&corpus(), &matcher, &tracker);

        let stats = tracker.get_stats();
        assert_eq!(stats.issues_scanned, 4);
        assert_eq!(stats.issues_matched, 3);
        assert_eq!(stats.fallback_snippets, 1);
    }
}
