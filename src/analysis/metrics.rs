//! Deviation metrics against the ideal continuous primitive.

use crate::contracts;
use crate::geometry::{LineSegment, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slope of a line segment, with a sentinel for vertical (and degenerate) lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    /// `dy / dx` for `dx != 0`.
    Finite(f64),
    /// `dx == 0`; the slope is not a finite number.
    Vertical,
}

impl Slope {
    /// Slope of the segment from start to end.
    #[must_use]
    pub fn of(line: &LineSegment) -> Self {
        let dx = line.dx();
        if dx == 0 {
            Self::Vertical
        } else {
            Self::Finite(line.dy() as f64 / dx as f64)
        }
    }

    /// Numeric value; [`f64::INFINITY`] for the vertical sentinel.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Finite(m) => m,
            Self::Vertical => f64::INFINITY,
        }
    }

    /// Whether this is the vertical sentinel.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(m) => write!(f, "{m:.2}"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// How a line pixel's deviation from the ideal segment is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineErrorMetric {
    /// `|py - (y1 + m (px - x1))|`; `|px - x1|` for vertical lines.
    Vertical,
    /// Deviation along the minor axis: vertical for `|dy| <= |dx|`,
    /// horizontal otherwise. Equal to [`LineErrorMetric::Vertical`] on every
    /// shallow and every vertical line.
    #[default]
    MinorAxis,
    /// Euclidean distance to the infinite ideal line.
    Perpendicular,
}

impl LineErrorMetric {
    /// Deviation of `point` from the ideal line through `line`, in pixels.
    #[must_use]
    pub fn deviation(self, line: &LineSegment, point: Point) -> f64 {
        let dx = line.dx();
        let dy = line.dy();
        if dx == 0 && dy == 0 {
            return point.distance(line.start);
        }

        let px = f64::from(point.x) - f64::from(line.start.x);
        let py = f64::from(point.y) - f64::from(line.start.y);
        let (dx, dy) = (dx as f64, dy as f64);

        match self {
            Self::Vertical => {
                if dx == 0.0 {
                    px.abs()
                } else {
                    (py - dy / dx * px).abs()
                }
            }
            Self::MinorAxis => {
                if dy.abs() <= dx.abs() {
                    (py - dy / dx * px).abs()
                } else {
                    (px - dx / dy * py).abs()
                }
            }
            Self::Perpendicular => (dy * px - dx * py).abs() / dx.hypot(dy),
        }
    }
}

impl fmt::Display for LineErrorMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertical => "vertical",
            Self::MinorAxis => "minor-axis",
            Self::Perpendicular => "perpendicular",
        })
    }
}

/// Aggregate of per-pixel deviations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ErrorStats {
    /// Arithmetic mean over all emitted pixels.
    pub average: f64,
    /// Largest single deviation.
    pub max: f64,
}

impl ErrorStats {
    /// Aggregate deviations. Empty input yields zeros.
    pub fn from_deviations<I: IntoIterator<Item = f64>>(deviations: I) -> Self {
        let mut sum = 0.0;
        let mut max = 0.0_f64;
        let mut count = 0_usize;
        for e in deviations {
            sum += e;
            max = max.max(e);
            count += 1;
        }
        if count == 0 {
            return Self::default();
        }
        let stats = Self { average: sum / count as f64, max };
        debug_assert!(contracts::stats::is_consistent(stats.average, stats.max));
        stats
    }
}
