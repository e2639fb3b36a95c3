//! Fidelity and timing analysis of rasterization strategies.
//!
//! Runs several strategies on the same primitive, times each rasterization with
//! a monotonic clock, and scores every emitted pixel against the ideal
//! continuous line or circle.
//!
//! # Example
//!
//! ```
//! use trueno_raster::analysis::{analyze_line, Slope};
//! use trueno_raster::raster::LineAlgorithm;
//!
//! let analysis = analyze_line(0, 0, 100, 50);
//! assert_eq!(analysis.slope, Slope::Finite(0.5));
//!
//! let bresenham = analysis.get(LineAlgorithm::Bresenham).unwrap();
//! assert_eq!(bresenham.point_count, 101);
//! assert!(bresenham.max_error < 1.0);
//! ```

mod metrics;

pub use metrics::{ErrorStats, LineErrorMetric, Slope};

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::geometry::{Circle, LineSegment, PointSequence};
use crate::raster::{CircleAlgorithm, LineAlgorithm, Rasterizer};
use std::time::{Duration, Instant};

/// Outcome of running one strategy on one primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Strategy name.
    pub algorithm: &'static str,
    /// Rasterization time only; error scoring is excluded.
    pub execution_time: Duration,
    /// Number of emitted pixels, duplicates included.
    pub point_count: usize,
    /// Mean deviation in pixels.
    pub average_error: f64,
    /// Largest deviation in pixels.
    pub max_error: f64,
    /// The emitted pixels in draw order.
    pub points: PointSequence,
}

impl AnalysisResult {
    fn new(
        algorithm: &'static str,
        execution_time: Duration,
        points: PointSequence,
        stats: ErrorStats,
    ) -> Self {
        Self {
            algorithm,
            execution_time,
            point_count: points.len(),
            average_error: stats.average,
            max_error: stats.max,
            points,
        }
    }

    /// Execution time in seconds.
    #[must_use]
    pub fn execution_secs(&self) -> f64 {
        self.execution_time.as_secs_f64()
    }

    /// Execution time in milliseconds.
    #[must_use]
    pub fn execution_millis(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }

    /// Error statistics as a pair.
    #[must_use]
    pub fn stats(&self) -> ErrorStats {
        ErrorStats { average: self.average_error, max: self.max_error }
    }
}

/// Per-strategy results, kept in the order the strategies were run.
///
/// Running a strategy twice keeps its first position and the latest result.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyResults<A> {
    entries: Vec<(A, AnalysisResult)>,
}

impl<A> Default for StrategyResults<A> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<A: Copy + PartialEq> StrategyResults<A> {
    fn insert(&mut self, algorithm: A, result: AnalysisResult) {
        match self.entries.iter_mut().find(|(a, _)| *a == algorithm) {
            Some(entry) => entry.1 = result,
            None => self.entries.push((algorithm, result)),
        }
    }

    /// Result for one strategy, if it was run.
    #[must_use]
    pub fn get(&self, algorithm: A) -> Option<&AnalysisResult> {
        self.entries.iter().find(|(a, _)| *a == algorithm).map(|(_, r)| r)
    }

    /// Strategies in run order.
    pub fn keys(&self) -> impl Iterator<Item = A> + '_ {
        self.entries.iter().map(|(a, _)| *a)
    }

    /// Results in run order.
    pub fn values(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.entries.iter().map(|(_, r)| r)
    }

    /// `(strategy, result)` pairs in run order.
    pub fn iter(&self) -> impl Iterator<Item = (A, &AnalysisResult)> {
        self.entries.iter().map(|(a, r)| (*a, r))
    }

    /// Number of strategies run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no strategy was run.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Results of analysing one line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineAnalysis {
    /// The analysed segment.
    pub line: LineSegment,
    /// Slope, or the vertical sentinel.
    pub slope: Slope,
    /// Metric used to score pixels.
    pub metric: LineErrorMetric,
    /// Per-strategy results.
    pub results: StrategyResults<LineAlgorithm>,
}

impl LineAnalysis {
    /// Result for one strategy, if it was run.
    #[must_use]
    pub fn get(&self, algorithm: LineAlgorithm) -> Option<&AnalysisResult> {
        self.results.get(algorithm)
    }

    /// Split into `(slope, results)`.
    #[must_use]
    pub fn into_parts(self) -> (Slope, StrategyResults<LineAlgorithm>) {
        (self.slope, self.results)
    }
}

/// Results of analysing one circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleAnalysis {
    /// The analysed circle.
    pub circle: Circle,
    /// Per-strategy results.
    pub results: StrategyResults<CircleAlgorithm>,
}

impl CircleAnalysis {
    /// Result for one strategy, if it was run.
    #[must_use]
    pub fn get(&self, algorithm: CircleAlgorithm) -> Option<&AnalysisResult> {
        self.results.get(algorithm)
    }
}

/// A named line test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePreset {
    /// Description of the case.
    pub name: &'static str,
    /// The segment.
    pub line: LineSegment,
}

/// Standard slope cases: shallow, steep, horizontal, vertical, diagonal.
pub const LINE_PRESETS: [LinePreset; 5] = [
    LinePreset { name: "Slope < 1", line: LineSegment::from_coords(0, 0, 100, 50) },
    LinePreset { name: "Slope > 1", line: LineSegment::from_coords(0, 0, 50, 100) },
    LinePreset { name: "Slope = 0", line: LineSegment::from_coords(0, 0, 100, 0) },
    LinePreset { name: "Vertical line", line: LineSegment::from_coords(0, 0, 0, 100) },
    LinePreset { name: "Slope = 1", line: LineSegment::from_coords(0, 0, 100, 100) },
];

/// Run `rasterize` `runs` times and keep the fastest measurement.
///
/// Every run is deterministic, so the pixels of the first run stand for all.
fn timed<F>(runs: u32, mut rasterize: F) -> (PointSequence, Duration)
where
    F: FnMut() -> PointSequence,
{
    let start = Instant::now();
    let points = rasterize();
    let mut best = start.elapsed();

    for _ in 1..runs {
        let start = Instant::now();
        let repeat = rasterize();
        best = best.min(start.elapsed());
        drop(repeat);
    }

    (points, best)
}

/// Strategy runner configured by an [`AnalysisConfig`].
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create an analyzer.
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run every configured line strategy on `line`.
    #[must_use]
    pub fn analyze_line(&self, line: &LineSegment) -> LineAnalysis {
        let slope = Slope::of(line);
        let metric = self.config.line_metric;
        let rounding = self.config.rounding;
        let mut results = StrategyResults::default();

        for &algorithm in &self.config.line_algorithms {
            let (points, elapsed) =
                timed(self.config.timing_runs, || algorithm.rasterize_with(line, rounding));
            let stats =
                ErrorStats::from_deviations(points.iter().map(|p| metric.deviation(line, p)));

            tracing::debug!(
                algorithm = algorithm.name(),
                points = points.len(),
                elapsed_us = elapsed.as_secs_f64() * 1e6,
                average_error = stats.average,
                max_error = stats.max,
                "line rasterized"
            );
            if algorithm == LineAlgorithm::Dda && stats.max >= 1.0 {
                tracing::debug!(max_error = stats.max, "DDA rounding drift exceeds one pixel");
            }

            let result = AnalysisResult::new(algorithm.name(), elapsed, points, stats);
            results.insert(algorithm, result);
        }

        LineAnalysis { line: *line, slope, metric, results }
    }

    /// Run every configured circle strategy on `circle`.
    #[must_use]
    pub fn analyze_circle(&self, circle: &Circle) -> CircleAnalysis {
        let mut results = StrategyResults::default();

        for &algorithm in &self.config.circle_algorithms {
            let (points, elapsed) = timed(self.config.timing_runs, || algorithm.rasterize(circle));
            let stats =
                ErrorStats::from_deviations(points.iter().map(|p| circle.radial_deviation(p)));

            tracing::debug!(
                algorithm = algorithm.name(),
                points = points.len(),
                elapsed_us = elapsed.as_secs_f64() * 1e6,
                average_error = stats.average,
                max_error = stats.max,
                "circle rasterized"
            );

            let result = AnalysisResult::new(algorithm.name(), elapsed, points, stats);
            results.insert(algorithm, result);
        }

        CircleAnalysis { circle: *circle, results }
    }
}

/// Analyse all line strategies on `(x1, y1) -> (x2, y2)` with default settings.
#[must_use]
pub fn analyze_line(x1: i32, y1: i32, x2: i32, y2: i32) -> LineAnalysis {
    Analyzer::default().analyze_line(&LineSegment::from_coords(x1, y1, x2, y2))
}

/// Analyse all circle strategies on the circle at `(xc, yc)` with radius `r`.
///
/// # Errors
///
/// Returns an error for a negative radius or out-of-range circle.
pub fn analyze_circle(xc: i32, yc: i32, r: i32) -> Result<CircleAnalysis> {
    Ok(Analyzer::default().analyze_circle(&Circle::from_coords(xc, yc, r)?))
}
