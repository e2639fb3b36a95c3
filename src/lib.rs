//! # Trueno-Raster
//!
//! Incremental rasterization of lines and circles, with fidelity and timing
//! analysis of each strategy.
//!
//! Every rasterizer converts a continuous primitive with integer parameters
//! into an ordered [`PointSequence`](geometry::PointSequence) of pixels using
//! exact integer decision-parameter recurrences (DDA uses floating increments).
//! The analysis layer scores every pixel against the ideal curve.
//!
//! ## Features
//!
//! - **Lines**: DDA, Bresenham and Midpoint, all octants, degenerate input
//! - **Circles**: Bresenham and Midpoint with 8-way symmetry
//! - **Analysis**: execution time, average and maximum error per strategy
//! - **Export**: CSV point tables with optional octant annotation
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let line = rasterize_line(LineAlgorithm::Bresenham, 0, 0, 4, 2);
//! assert_eq!(line.len(), 5);
//!
//! let analysis = analyze_circle(0, 0, 10)?;
//! let report = Report::for_circle(&analysis);
//! assert!(report.as_str().contains("Midpoint Algorithm:"));
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli`: the `trueno-raster` command line analyzer
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   IBM Systems Journal 4(1).
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a
//!   digital plotter." Computer Journal 10(3).
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of
//!   circular arcs." Communications of the ACM 20(2).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, line segments, circles, pixel sequences).
pub mod geometry;

/// Line and circle rasterizers, octant classification.
pub mod raster;

/// Executable invariants checked by debug assertions and tests.
pub mod contracts;

// ============================================================================
// Analysis Modules
// ============================================================================

/// Fidelity and timing analysis.
pub mod analysis;

/// Analysis configuration (YAML).
pub mod config;

/// Output encoders (CSV, text report).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analysis::{
        analyze_circle, analyze_line, AnalysisResult, Analyzer, CircleAnalysis, LineAnalysis,
        LineErrorMetric, Slope,
    };
    pub use crate::config::AnalysisConfig;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Circle, LineSegment, Point, PointSequence};
    pub use crate::output::{PointTable, Report};
    pub use crate::raster::{
        octant, rasterize_circle, rasterize_line, CircleAlgorithm, LineAlgorithm, Octant,
        Rasterizer, RoundingMode,
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_prelude_round_trip() {
        let analysis = analyze_line(0, 0, 10, 4);
        let table = PointTable::from_line_analysis(&analysis);
        assert_eq!(table.len(), 3 * 11);
        assert_eq!(octant(Point::new(1, 5), Point::ORIGIN), Octant::Second);
    }
}
