// file: src/exporter/chart.rs
// description: horizontal bar chart rendering for per-issue keyword counts
// reference: https://docs.rs/colored

use colored::Colorize;
use std::fmt::Write as _;

const BAR_CELL: char = '█';

pub struct BarChart {
    width: usize,
}

impl BarChart {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }

    /// Renders one row per `(label, count)` pair, in the given order.
    pub fn render(&self, title: &str, axis_label: &str, series: &[(String, usize)]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}\n", title.bold());

        let label_width = series
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        let max_count = series.iter().map(|(_, count)| *count).max().unwrap_or(0);

        for (label, count) in series {
            let bar: String =
                std::iter::repeat_n(BAR_CELL, self.bar_len(*count, max_count)).collect();
            let _ = writeln!(
                out,
                "{:<label_width$} │{} {}",
                label,
                bar.cyan(),
                count,
                label_width = label_width
            );
        }

        let _ = writeln!(
            out,
            "{:label_width$}  {}",
            "",
            axis_label.dimmed(),
            label_width = label_width
        );
        out
    }

    fn bar_len(&self, count: usize, max_count: usize) -> usize {
        if count == 0 || max_count == 0 {
            return 0;
        }
        (count * self.width).div_ceil(max_count).max(1)
    }
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bar_scaling() {
        let chart = BarChart::new(10);
        assert_eq!(chart.bar_len(10, 10), 10);
        assert_eq!(chart.bar_len(5, 10), 5);
        assert_eq!(chart.bar_len(1, 100), 1);
        assert_eq!(chart.bar_len(0, 10), 0);
    }

    #[test]
    fn test_render_rows_in_order() {
        colored::control::set_override(false);
        let chart = BarChart::new(4);
        let series = vec![("Build fails".to_string(), 4), ("Lock".to_string(), 2)];

        let rendered = chart.render("Occurrences", "Number of keyword matches", &series);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Occurrences");
        assert_eq!(lines[2], "Build fails │████ 4");
        assert_eq!(lines[3], "Lock        │██ 2");
        assert_eq!(lines[4].trim(), "Number of keyword matches");
    }

    #[test]
    fn test_render_empty_series() {
        colored::control::set_override(false);
        let rendered = BarChart::default().render("Empty", "axis", &[]);
        assert!(rendered.starts_with("Empty\n"));
    }
}
