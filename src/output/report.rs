//! Plain-text analysis report.

use crate::analysis::{AnalysisResult, Analyzer, CircleAnalysis, LineAnalysis, LINE_PRESETS};
use std::fmt::{self, Write as FmtWrite};

/// Separator line between joined reports.
const RULE: &str = "----------------------------------------";

/// Human-readable summary of an analysis, one block per strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    text: String,
}

impl Report {
    /// Report for a line analysis, headed by the segment and its slope.
    #[must_use]
    pub fn for_line(analysis: &LineAnalysis) -> Self {
        let mut text = String::with_capacity(512);
        let _ = writeln!(text, "Line {} -> {}", analysis.line.start, analysis.line.end);
        let _ = writeln!(text, "Slope: {}", analysis.slope);
        let _ = writeln!(text, "Error metric: {}", analysis.metric);
        text.push('\n');
        for result in analysis.results.values() {
            push_result(&mut text, result);
        }
        Self { text }
    }

    /// Report for a circle analysis.
    #[must_use]
    pub fn for_circle(analysis: &CircleAnalysis) -> Self {
        let mut text = String::with_capacity(512);
        let _ = writeln!(
            text,
            "Circle center {}, radius {}",
            analysis.circle.center(),
            analysis.circle.radius()
        );
        text.push('\n');
        for result in analysis.results.values() {
            push_result(&mut text, result);
        }
        Self { text }
    }

    /// Reports for every entry of [`LINE_PRESETS`], each headed by its case
    /// name, joined in preset order.
    #[must_use]
    pub fn for_line_presets(analyzer: &Analyzer) -> Self {
        Self::join(LINE_PRESETS.iter().map(|preset| {
            tracing::debug!(case = preset.name, "running preset");
            Self::for_line(&analyzer.analyze_line(&preset.line)).titled(preset.name)
        }))
    }

    /// Prefix the report with a `== title ==` heading.
    #[must_use]
    pub fn titled(self, title: &str) -> Self {
        Self { text: format!("== {title} ==\n{}", self.text) }
    }

    /// Concatenate reports, separated by a rule.
    #[must_use]
    pub fn join<I: IntoIterator<Item = Self>>(reports: I) -> Self {
        let mut text = String::new();
        for (i, report) in reports.into_iter().enumerate() {
            if i > 0 {
                text.push_str(RULE);
                text.push('\n');
            }
            text.push_str(&report.text);
        }
        Self { text }
    }

    /// The rendered text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn push_result(text: &mut String, result: &AnalysisResult) {
    let _ = writeln!(text, "{} Algorithm:", result.algorithm);
    let _ = writeln!(text, "Execution time: {:.4} ms", result.execution_millis());
    let _ = writeln!(text, "Points generated: {}", result.point_count);
    let stats = result.stats();
    let _ = writeln!(text, "Average error: {:.4}", stats.average);
    let _ = writeln!(text, "Maximum error: {:.4}", stats.max);
    text.push('\n');
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_circle, analyze_line};

    #[test]
    fn test_line_report() {
        let report = Report::for_line(&analyze_line(0, 0, 100, 50));
        let text = report.as_str();

        assert!(text.starts_with("Line (0, 0) -> (100, 50)\n"));
        assert!(text.contains("Slope: 0.50"));
        assert!(text.contains("DDA Algorithm:"));
        assert!(text.contains("Bresenham Algorithm:"));
        assert!(text.contains("Midpoint Algorithm:"));
        assert_eq!(text.matches("Points generated: 101").count(), 3);
        assert!(text.contains(" ms\n"));
    }

    #[test]
    fn test_vertical_report() {
        let report = Report::for_line(&analyze_line(0, 0, 0, 100));
        assert!(report.to_string().contains("Slope: vertical"));
        assert!(report.as_str().contains("Maximum error: 0.0000"));
    }

    #[test]
    fn test_circle_report() {
        let report = Report::for_circle(&analyze_circle(1, 2, 10).unwrap());
        let text = report.as_str();
        assert!(text.starts_with("Circle center (1, 2), radius 10\n"));
        assert_eq!(text.matches("Algorithm:").count(), 2);
    }

    #[test]
    fn test_join() {
        let a = Report::for_line(&analyze_line(0, 0, 3, 0));
        let b = Report::for_line(&analyze_line(0, 0, 0, 3));
        let joined = Report::join([a.clone(), b]);
        assert!(joined.as_str().starts_with(a.as_str()));
        assert_eq!(joined.as_str().lines().filter(|l| *l == RULE).count(), 1);
    }

    #[test]
    fn test_join_three_has_two_rules() {
        let reports = (1..=3).map(|n| Report::for_line(&analyze_line(0, 0, n, 0)));
        let joined = Report::join(reports);
        assert_eq!(joined.as_str().lines().filter(|l| *l == RULE).count(), 2);
    }

    #[test]
    fn test_titled() {
        let report = Report::for_line(&analyze_line(0, 0, 3, 0)).titled("Slope = 0");
        assert!(report.as_str().starts_with("== Slope = 0 ==\nLine (0, 0) -> (3, 0)\n"));
    }

    #[test]
    fn test_line_presets_report_names_every_case() {
        let report = Report::for_line_presets(&Analyzer::default());
        let text = report.as_str();
        let mut last = 0;
        for preset in &LINE_PRESETS {
            let heading = format!("== {} ==", preset.name);
            let at = text.find(&heading).unwrap();
            assert!(at >= last, "{} out of order", preset.name);
            last = at;
        }
        assert!(text.contains("Slope: vertical"));
        assert_eq!(text.lines().filter(|l| *l == RULE).count(), LINE_PRESETS.len() - 1);
    }

    #[test]
    fn test_report_follows_configured_order() {
        use crate::config::AnalysisConfig;
        use crate::geometry::LineSegment;
        use crate::raster::LineAlgorithm;

        let config = AnalysisConfig::new()
            .line_algorithms(vec![LineAlgorithm::Midpoint, LineAlgorithm::Dda]);
        let analysis = Analyzer::new(config).analyze_line(&LineSegment::from_coords(0, 0, 6, 2));
        let text = Report::for_line(&analysis).to_string();
        let midpoint = text.find("Midpoint Algorithm:").unwrap();
        let dda = text.find("DDA Algorithm:").unwrap();
        assert!(midpoint < dda);
    }
}
