//! Geometric primitives for rasterization.
//!
//! Provides the integer pixel types consumed and produced by the rasterizers:
//! [`Point`], [`LineSegment`], [`Circle`] and the ordered [`PointSequence`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// A pixel coordinate with integer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// Translate by a relative offset.
    ///
    /// Callers guarantee the result fits in `i32`; [`Circle::new`] enforces this
    /// for every image the circle rasterizers emit.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = Error;

    /// Parse the `"x,y"` text form used by the input layer.
    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| Error::Validation(format!("expected 'x,y', got '{s}'")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| Error::Validation(format!("'{}' is not an integer", part.trim())))
        };
        Ok(Self::new(parse(x)?, parse(y)?))
    }
}

/// A line segment between two pixel coordinates. May be degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSegment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl LineSegment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line segment from coordinates.
    #[must_use]
    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Whether start and end coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Signed x extent, widened so it cannot overflow.
    #[must_use]
    pub fn dx(&self) -> i64 {
        i64::from(self.end.x) - i64::from(self.start.x)
    }

    /// Signed y extent, widened so it cannot overflow.
    #[must_use]
    pub fn dy(&self) -> i64 {
        i64::from(self.end.y) - i64::from(self.start.y)
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A circle with integer center and non-negative integer radius.
///
/// Construction is validated so that every pixel the rasterizers can emit
/// (`center ± radius` on either axis) is representable as `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    center: Point,
    radius: i32,
}

impl Circle {
    /// Create a validated circle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeRadius`] for `radius < 0` and
    /// [`Error::CoordinateOutOfRange`] when `center ± radius` overflows `i32`.
    pub fn new(center: Point, radius: i32) -> Result<Self> {
        if radius < 0 {
            return Err(Error::NegativeRadius(radius));
        }
        let fits = center.x.checked_add(radius).is_some()
            && center.x.checked_sub(radius).is_some()
            && center.y.checked_add(radius).is_some()
            && center.y.checked_sub(radius).is_some();
        if !fits {
            return Err(Error::CoordinateOutOfRange { x: center.x, y: center.y, radius });
        }
        Ok(Self { center, radius })
    }

    /// Create a validated circle from coordinates.
    ///
    /// # Errors
    ///
    /// See [`Circle::new`].
    pub fn from_coords(xc: i32, yc: i32, radius: i32) -> Result<Self> {
        Self::new(Point::new(xc, yc), radius)
    }

    /// Circle center.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Circle radius (always `>= 0`).
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Absolute deviation of a pixel's distance from the ideal perimeter.
    #[must_use]
    pub fn radial_deviation(&self, point: Point) -> f64 {
        (point.distance(self.center) - f64::from(self.radius)).abs()
    }
}

/// Ordered sequence of emitted pixels; insertion order is the draw order.
///
/// Duplicates are kept: circle octant seams and the zero radius case emit the
/// same pixel more than once. Use [`PointSequence::distinct`] when unique pixels
/// are needed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    /// Create an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create an empty sequence with reserved capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { points: Vec::with_capacity(capacity) }
    }

    /// Append a pixel.
    #[inline]
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of emitted pixels, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First emitted pixel.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last emitted pixel.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Iterate in emission order. Each call restarts from the first pixel.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Point>> {
        self.points.iter().copied()
    }

    /// Borrow the pixels as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Consume into the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Point> {
        self.points
    }

    /// Whether the pixel was emitted at least once.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Unique pixels, keeping the order of first emission.
    #[must_use]
    pub fn distinct(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.points.len());
        self.points.iter().copied().filter(|p| seen.insert(*p)).collect()
    }
}

impl Index<usize> for PointSequence {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl FromIterator<Point> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl IntoIterator for PointSequence {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Point>> for PointSequence {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0, 0);
        let p2 = Point::new(3, 4);
        assert_relative_eq!(p1.distance(p2), 5.0);
    }

    #[test]
    fn test_point_parse() {
        assert_eq!(" 12 , -7 ".parse::<Point>().unwrap(), Point::new(12, -7));
    }

    #[test]
    fn test_point_parse_rejects_garbage() {
        assert!(matches!("12".parse::<Point>(), Err(Error::Validation(_))));
        assert!(matches!("a,1".parse::<Point>(), Err(Error::Validation(_))));
        assert!(matches!("1,".parse::<Point>(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_line_extents_do_not_overflow() {
        let line = LineSegment::from_coords(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(line.dx(), i64::from(u32::MAX));
        assert_eq!(line.dy(), i64::from(u32::MAX));
    }

    #[test]
    fn test_line_length() {
        let line = LineSegment::from_coords(0, 0, 3, 4);
        assert_relative_eq!(line.length(), 5.0);
        assert!(!line.is_degenerate());
        assert!(LineSegment::from_coords(5, 5, 5, 5).is_degenerate());
    }

    #[test]
    fn test_circle_rejects_negative_radius() {
        assert!(matches!(Circle::from_coords(0, 0, -1), Err(Error::NegativeRadius(-1))));
    }

    #[test]
    fn test_circle_rejects_overflowing_bounds() {
        let err = Circle::from_coords(i32::MAX - 5, 0, 10).unwrap_err();
        assert!(matches!(err, Error::CoordinateOutOfRange { .. }));
        assert!(Circle::from_coords(i32::MAX - 10, 0, 10).is_ok());
    }

    #[test]
    fn test_circle_radial_deviation() {
        let circle = Circle::from_coords(0, 0, 5).unwrap();
        assert_relative_eq!(circle.radial_deviation(Point::new(3, 4)), 0.0);
        assert_relative_eq!(circle.radial_deviation(Point::new(0, 7)), 2.0);
    }

    #[test]
    fn test_sequence_distinct_keeps_first_occurrence() {
        let seq: PointSequence =
            [(1, 1), (2, 2), (1, 1), (3, 3), (2, 2)].into_iter().map(Point::from).collect();
        let distinct = seq.distinct();
        assert_eq!(
            distinct.as_slice(),
            &[Point::new(1, 1), Point::new(2, 2), Point::new(3, 3)]
        );
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn test_sequence_iter_restarts() {
        let seq = PointSequence::from(vec![Point::new(0, 0), Point::new(1, 0)]);
        let first: Vec<_> = seq.iter().collect();
        let second: Vec<_> = seq.iter().collect();
        assert_eq!(first, second);
        assert_eq!(seq[1], Point::new(1, 0));
        assert_eq!(seq.first(), Some(Point::ORIGIN));
        assert_eq!(seq.last(), Some(Point::new(1, 0)));
    }
}
