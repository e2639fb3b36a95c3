//! Checked contracts for rasterizer output.
//!
//! Design-by-contract predicates written as pre/postconditions in the
//! Verus style. Each contract is also an executable predicate, used by
//! `debug_assert!` inside the rasterizers and by the property tests.

/// Line output invariants
///
/// #[ensures(result.first() == line.start)]
/// #[ensures(result.last() == line.end)]
/// #[invariant(forall i: |p[i+1].x - p[i].x| <= 1 && |p[i+1].y - p[i].y| <= 1)]
/// #[decreases(max(|dx|, |dy|) - step)]
pub mod line {
    use crate::geometry::{LineSegment, PointSequence};

    /// First pixel is the start and last pixel is the end, exactly.
    ///
    /// #[requires(!points.is_empty())]
    /// #[ensures(result == true ==> points.first() == Some(line.start))]
    pub fn endpoints_exact(points: &PointSequence, line: &LineSegment) -> bool {
        points.first() == Some(line.start) && points.last() == Some(line.end)
    }

    /// Consecutive pixels are 8-connected: no gaps, no jumps.
    ///
    /// #[ensures(result == true ==> forall i: chebyshev(p[i], p[i+1]) <= 1)]
    pub fn is_eight_connected(points: &PointSequence) -> bool {
        points.as_slice().windows(2).all(|w| {
            (i64::from(w[1].x) - i64::from(w[0].x)).abs() <= 1
                && (i64::from(w[1].y) - i64::from(w[0].y)).abs() <= 1
        })
    }

    /// Pixel count equals `max(|dx|, |dy|) + 1`.
    ///
    /// #[ensures(result == true ==> points.len() == max(|dx|, |dy|) + 1)]
    pub fn has_expected_length(points: &PointSequence, line: &LineSegment) -> bool {
        let steps = line.dx().abs().max(line.dy().abs());
        points.len() as i64 == steps + 1
    }
}

/// Circle output invariants
///
/// #[requires(radius >= 0)]
/// #[ensures(result.len() % 8 == 0)]
/// #[invariant(forall p in result: all 8 mirror images of p - center are in result)]
/// #[decreases(y - x)]
pub mod circle {
    use crate::geometry::{Point, PointSequence};
    use std::collections::HashSet;

    /// Output is made of whole 8-point groups.
    ///
    /// #[ensures(result == true ==> points.len() % 8 == 0)]
    pub fn is_whole_octant_groups(points: &PointSequence) -> bool {
        points.len() % 8 == 0
    }

    /// The 8 reflections of `(dx, dy)` across both axes and the diagonal.
    pub fn mirror_images(dx: i64, dy: i64) -> [(i64, i64); 8] {
        [
            (dx, dy),
            (-dx, dy),
            (dx, -dy),
            (-dx, -dy),
            (dy, dx),
            (-dy, dx),
            (dy, -dx),
            (-dy, -dx),
        ]
    }

    /// Every emitted pixel has all seven mirror images emitted as well.
    ///
    /// #[ensures(result == true ==> forall p in points: mirror_images(p - center) subset points)]
    pub fn is_eight_fold_symmetric(points: &PointSequence, center: Point) -> bool {
        let offsets: HashSet<(i64, i64)> = points
            .iter()
            .map(|p| (i64::from(p.x) - i64::from(center.x), i64::from(p.y) - i64::from(center.y)))
            .collect();
        offsets
            .iter()
            .all(|&(dx, dy)| mirror_images(dx, dy).iter().all(|m| offsets.contains(m)))
    }
}

/// Error statistic invariants
///
/// #[requires(errors.all(|e| e.is_finite() && e >= 0.0))]
/// #[ensures(result.average <= result.max)]
pub mod stats {
    /// Average never exceeds maximum, both non-negative and finite.
    ///
    /// #[ensures(result == true ==> 0.0 <= average <= max)]
    pub fn is_consistent(average: f64, max: f64) -> bool {
        average.is_finite() && max.is_finite() && average >= 0.0 && average <= max + f64::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LineSegment, Point, PointSequence};

    fn seq(coords: &[(i32, i32)]) -> PointSequence {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_endpoints_exact() {
        let l = LineSegment::from_coords(0, 0, 2, 1);
        assert!(line::endpoints_exact(&seq(&[(0, 0), (1, 1), (2, 1)]), &l));
        assert!(!line::endpoints_exact(&seq(&[(0, 0), (1, 1)]), &l));
        assert!(!line::endpoints_exact(&PointSequence::new(), &l));
    }

    #[test]
    fn test_eight_connected() {
        assert!(line::is_eight_connected(&seq(&[(0, 0), (1, 1), (1, 2)])));
        assert!(!line::is_eight_connected(&seq(&[(0, 0), (2, 0)])));
        assert!(line::is_eight_connected(&seq(&[(4, 4)])));
    }

    #[test]
    fn test_expected_length() {
        let l = LineSegment::from_coords(0, 0, -3, 1);
        assert!(line::has_expected_length(&seq(&[(0, 0), (-1, 0), (-2, 1), (-3, 1)]), &l));
    }

    #[test]
    fn test_eight_fold_symmetric() {
        let center = Point::new(1, 1);
        let full: PointSequence = circle::mirror_images(2, 1)
            .iter()
            .map(|&(dx, dy)| Point::new(1 + dx as i32, 1 + dy as i32))
            .collect();
        assert!(circle::is_eight_fold_symmetric(&full, center));
        assert!(circle::is_whole_octant_groups(&full));

        let partial = seq(&[(3, 2), (-1, 2)]);
        assert!(!circle::is_eight_fold_symmetric(&partial, center));
    }

    #[test]
    fn test_stats_consistent() {
        assert!(stats::is_consistent(0.25, 0.5));
        assert!(stats::is_consistent(0.0, 0.0));
        assert!(!stats::is_consistent(0.6, 0.5));
        assert!(!stats::is_consistent(f64::NAN, 0.5));
    }
}
