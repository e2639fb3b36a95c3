//! Incremental rasterization of lines and circles.
//!
//! Every strategy maps integer primitive parameters to an ordered
//! [`PointSequence`]. Strategies are closed enumerations dispatched through the
//! [`Rasterizer`] trait rather than looked up by name at runtime.
//!
//! # Algorithms
//!
//! - **DDA**: floating-point increments, rounded per step
//! - **Bresenham's Line**: integer decision parameter `p = 2dy - dx`
//! - **Midpoint Line**: doubled midpoint decision parameter, same pixels as Bresenham
//! - **Bresenham's Circle**: `d = 3 - 2r`, one octant mirrored eight ways
//! - **Midpoint Circle**: `p = 1 - r`, one octant mirrored eight ways
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a
//!   digital plotter."

mod circle;
mod line;
mod octant;

pub use circle::{bresenham_circle, midpoint_circle};
pub use line::{bresenham_line, dda_line, dda_line_with, midpoint_line};
pub use octant::{octant, Octant};

use crate::error::{Error, Result};
use crate::geometry::{Circle, LineSegment, PointSequence};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Uniform interface over the rasterization strategies of one primitive kind.
pub trait Rasterizer<P: ?Sized> {
    /// Rasterize the primitive into pixels in draw order.
    fn rasterize(&self, primitive: &P) -> PointSequence;

    /// Human-readable strategy name.
    fn name(&self) -> &'static str;
}

// ============================================================================
// Rounding
// ============================================================================

/// Tie rule used when DDA rounds its floating-point cursor to a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties go to the even integer (`2.5 -> 2`, `3.5 -> 4`).
    #[default]
    HalfToEven,
    /// Ties go away from zero (`2.5 -> 3`, `-2.5 -> -3`).
    HalfAwayFromZero,
}

impl RoundingMode {
    /// Round a cursor value under this tie rule.
    #[inline]
    #[must_use]
    pub fn round(self, value: f64) -> f64 {
        match self {
            Self::HalfToEven => value.round_ties_even(),
            Self::HalfAwayFromZero => value.round(),
        }
    }
}

// ============================================================================
// Line strategies
// ============================================================================

/// Line rasterization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAlgorithm {
    /// Digital differential analyzer.
    Dda,
    /// Bresenham's integer line algorithm.
    Bresenham,
    /// Midpoint line algorithm.
    Midpoint,
}

impl LineAlgorithm {
    /// All line strategies in reporting order.
    pub const ALL: [Self; 3] = [Self::Dda, Self::Bresenham, Self::Midpoint];

    /// Rasterize with an explicit DDA tie rule. Integer strategies ignore it.
    #[must_use]
    pub fn rasterize_with(self, line: &LineSegment, rounding: RoundingMode) -> PointSequence {
        match self {
            Self::Dda => dda_line_with(line, rounding),
            Self::Bresenham => bresenham_line(line),
            Self::Midpoint => midpoint_line(line),
        }
    }
}

impl Rasterizer<LineSegment> for LineAlgorithm {
    fn rasterize(&self, line: &LineSegment) -> PointSequence {
        self.rasterize_with(line, RoundingMode::default())
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Dda => "DDA",
            Self::Bresenham => "Bresenham",
            Self::Midpoint => "Midpoint",
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dda" => Ok(Self::Dda),
            "bresenham" => Ok(Self::Bresenham),
            "midpoint" | "mid-point" => Ok(Self::Midpoint),
            other => Err(Error::Validation(format!("unknown line algorithm '{other}'"))),
        }
    }
}

// ============================================================================
// Circle strategies
// ============================================================================

/// Circle rasterization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleAlgorithm {
    /// Bresenham's circle algorithm.
    Bresenham,
    /// Midpoint circle algorithm.
    Midpoint,
}

impl CircleAlgorithm {
    /// All circle strategies in reporting order.
    pub const ALL: [Self; 2] = [Self::Bresenham, Self::Midpoint];
}

impl Rasterizer<Circle> for CircleAlgorithm {
    fn rasterize(&self, circle: &Circle) -> PointSequence {
        match self {
            Self::Bresenham => bresenham_circle(circle),
            Self::Midpoint => midpoint_circle(circle),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Bresenham => "Bresenham",
            Self::Midpoint => "Midpoint",
        }
    }
}

impl fmt::Display for CircleAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CircleAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bresenham" => Ok(Self::Bresenham),
            "midpoint" | "mid-point" => Ok(Self::Midpoint),
            other => Err(Error::Validation(format!("unknown circle algorithm '{other}'"))),
        }
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Rasterize the segment `(x1, y1) -> (x2, y2)`.
///
/// Degenerate input yields the single start pixel.
///
/// # Example
///
/// ```
/// use trueno_raster::raster::{rasterize_line, LineAlgorithm};
///
/// let points = rasterize_line(LineAlgorithm::Bresenham, 0, 0, 3, 1);
/// assert_eq!(points.len(), 4);
/// ```
#[must_use]
pub fn rasterize_line(
    algorithm: LineAlgorithm,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) -> PointSequence {
    algorithm.rasterize(&LineSegment::from_coords(x1, y1, x2, y2))
}

/// Rasterize the circle centered at `(xc, yc)` with radius `r`.
///
/// # Errors
///
/// Returns an error for a negative radius or a circle whose pixels would not
/// fit in `i32` coordinates.
pub fn rasterize_circle(
    algorithm: CircleAlgorithm,
    xc: i32,
    yc: i32,
    r: i32,
) -> Result<PointSequence> {
    Ok(algorithm.rasterize(&Circle::from_coords(xc, yc, r)?))
}
