//! Octant classification for reporting.
//!
//! Labels a pixel with one of the eight 45° sectors around a center. Used to
//! annotate exported circle points; it plays no part in rasterization.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of eight 45° sectors around a center, numbered 1 through 8.
///
/// Quadrants are chosen by the signs of `dx = x - xc` and `dy = y - yc`
/// (a zero offset counts as non-negative); within a quadrant the label
/// depends on which of `|dx|`, `|dy|` dominates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Octant {
    /// `dx >= 0, dy >= 0, dx >= dy`
    First,
    /// `dx >= 0, dy >= 0, dx < dy`
    Second,
    /// `dx < 0, dy >= 0, |dx| <= dy`
    Third,
    /// `dx < 0, dy >= 0, |dx| > dy`
    Fourth,
    /// `dx < 0, dy < 0, |dx| >= |dy|`
    Fifth,
    /// `dx < 0, dy < 0, |dx| < |dy|`
    Sixth,
    /// `dx >= 0, dy < 0, dx >= |dy|`
    Seventh,
    /// `dx >= 0, dy < 0, dx < |dy|`
    Eighth,
}

impl Octant {
    /// Octant label as a number in `1..=8`.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
            Self::Sixth => 6,
            Self::Seventh => 7,
            Self::Eighth => 8,
        }
    }
}

impl fmt::Display for Octant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Classify `point` relative to `center`.
#[must_use]
pub fn octant(point: Point, center: Point) -> Octant {
    let dx = i64::from(point.x) - i64::from(center.x);
    let dy = i64::from(point.y) - i64::from(center.y);

    match (dx >= 0, dy >= 0) {
        (true, true) => {
            if dx >= dy {
                Octant::First
            } else {
                Octant::Second
            }
        }
        (false, true) => {
            if -dx <= dy {
                Octant::Third
            } else {
                Octant::Fourth
            }
        }
        (false, false) => {
            if -dx >= -dy {
                Octant::Fifth
            } else {
                Octant::Sixth
            }
        }
        (true, false) => {
            if dx >= -dy {
                Octant::Seventh
            } else {
                Octant::Eighth
            }
        }
    }
}
