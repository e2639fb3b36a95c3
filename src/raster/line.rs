//! Line rasterization: DDA, Bresenham and Midpoint.
//!
//! All three strategies emit the start pixel first and the end pixel last.
//! Bresenham and Midpoint work purely in integers (deltas and decision
//! parameters in `i64`, so no `i32` input can overflow) and produce identical
//! pixels for identical endpoints. When the decision parameter is exactly zero
//! both take the diagonal step.

use super::RoundingMode;
use crate::contracts;
use crate::geometry::{LineSegment, Point, PointSequence};

/// Build a pixel from widened cursor values that are known to lie between
/// the segment's `i32` endpoints.
#[inline]
fn pixel(x: i64, y: i64) -> Point {
    Point::new(x as i32, y as i32)
}

/// Unit step toward the end coordinate; `-1` when the extent is zero, where it
/// is never applied.
#[inline]
fn unit_step(from: i32, to: i32) -> i64 {
    if to > from {
        1
    } else {
        -1
    }
}

/// DDA line with the default tie rule ([`RoundingMode::HalfToEven`]).
#[must_use]
pub fn dda_line(line: &LineSegment) -> PointSequence {
    dda_line_with(line, RoundingMode::default())
}

/// Digital differential analyzer.
///
/// Steps `max(|dx|, |dy|)` times along real-valued increments and rounds the
/// accumulated cursor at every step. The accumulation error is deliberate: it is
/// what the analysis engine measures against the integer strategies.
#[must_use]
pub fn dda_line_with(line: &LineSegment, rounding: RoundingMode) -> PointSequence {
    let dx = line.dx();
    let dy = line.dy();
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return PointSequence::from(vec![line.start]);
    }

    let x_increment = dx as f64 / steps as f64;
    let y_increment = dy as f64 / steps as f64;

    let mut x = f64::from(line.start.x);
    let mut y = f64::from(line.start.y);
    let mut points = PointSequence::with_capacity(steps as usize + 1);

    for _ in 0..=steps {
        points.push(Point::new(rounding.round(x) as i32, rounding.round(y) as i32));
        x += x_increment;
        y += y_increment;
    }

    points
}

/// Bresenham's line algorithm.
///
/// The primary axis is x when `dx > dy`, otherwise y. Each iteration emits the
/// current pixel, then advances the primary axis and, when `p >= 0`, the
/// secondary axis as well.
#[must_use]
pub fn bresenham_line(line: &LineSegment) -> PointSequence {
    let dx = line.dx().abs();
    let dy = line.dy().abs();
    let step_x = unit_step(line.start.x, line.end.x);
    let step_y = unit_step(line.start.y, line.end.y);

    let mut x = i64::from(line.start.x);
    let mut y = i64::from(line.start.y);
    let mut points = PointSequence::with_capacity(dx.max(dy) as usize + 1);

    if dx > dy {
        let mut p = 2 * dy - dx;
        for _ in 0..=dx {
            points.push(pixel(x, y));
            if p >= 0 {
                y += step_y;
                p -= 2 * dx;
            }
            x += step_x;
            p += 2 * dy;
        }
    } else {
        let mut p = 2 * dx - dy;
        for _ in 0..=dy {
            points.push(pixel(x, y));
            if p >= 0 {
                x += step_x;
                p -= 2 * dy;
            }
            y += step_y;
            p += 2 * dx;
        }
    }

    debug_assert!(contracts::line::endpoints_exact(&points, line));
    points
}

/// Midpoint line algorithm in its doubled integer form.
///
/// Decision parameter `d = 2dy - dx` with increments `2dy` (axial step) and
/// `2(dy - dx)` (diagonal step). `d >= 0` selects the diagonal pixel, so a tie
/// (`d == 0`) resolves the same way as Bresenham's `p >= 0`.
#[must_use]
pub fn midpoint_line(line: &LineSegment) -> PointSequence {
    let dx = line.dx().abs();
    let dy = line.dy().abs();
    let step_x = unit_step(line.start.x, line.end.x);
    let step_y = unit_step(line.start.y, line.end.y);

    let mut x = i64::from(line.start.x);
    let mut y = i64::from(line.start.y);
    let mut points = PointSequence::with_capacity(dx.max(dy) as usize + 1);
    points.push(line.start);

    if dx > dy {
        let mut d = 2 * dy - dx;
        let incr_axial = 2 * dy;
        let incr_diagonal = 2 * (dy - dx);
        for _ in 0..dx {
            if d >= 0 {
                d += incr_diagonal;
                y += step_y;
            } else {
                d += incr_axial;
            }
            x += step_x;
            points.push(pixel(x, y));
        }
    } else {
        let mut d = 2 * dx - dy;
        let incr_axial = 2 * dx;
        let incr_diagonal = 2 * (dx - dy);
        for _ in 0..dy {
            if d >= 0 {
                d += incr_diagonal;
                x += step_x;
            } else {
                d += incr_axial;
            }
            y += step_y;
            points.push(pixel(x, y));
        }
    }

    debug_assert!(contracts::line::endpoints_exact(&points, line));
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_degenerate_line_single_point() {
        let line = LineSegment::from_coords(5, 5, 5, 5);
        for points in [dda_line(&line), bresenham_line(&line), midpoint_line(&line)] {
            assert_eq!(points.as_slice(), &[Point::new(5, 5)]);
        }
    }

    #[test]
    fn test_bresenham_shallow_line() {
        let points = bresenham_line(&LineSegment::from_coords(0, 0, 100, 50));
        assert_eq!(points.len(), 101);
        assert_eq!(points.first(), Some(Point::new(0, 0)));
        assert_eq!(points.last(), Some(Point::new(100, 50)));
    }

    #[test]
    fn test_bresenham_vertical_line() {
        let points = bresenham_line(&LineSegment::from_coords(0, 0, 0, 100));
        let expected: Vec<Point> = (0..=100).map(|y| Point::new(0, y)).collect();
        assert_eq!(points.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_bresenham_horizontal_reversed() {
        let points = bresenham_line(&LineSegment::from_coords(3, 2, -1, 2));
        assert_eq!(points.as_slice(), pts(&[(3, 2), (2, 2), (1, 2), (0, 2), (-1, 2)]).as_slice());
    }

    #[test]
    fn test_diagonal_45_degrees() {
        let line = LineSegment::from_coords(0, 0, 4, -4);
        let expected = pts(&[(0, 0), (1, -1), (2, -2), (3, -3), (4, -4)]);
        assert_eq!(bresenham_line(&line).as_slice(), expected.as_slice());
        assert_eq!(midpoint_line(&line).as_slice(), expected.as_slice());
        assert_eq!(dda_line(&line).as_slice(), expected.as_slice());
    }

    #[test]
    fn test_tie_takes_diagonal_step() {
        // dx = 2, dy = 1: the first decision parameter is exactly zero.
        let line = LineSegment::from_coords(0, 0, 2, 1);
        let expected = pts(&[(0, 0), (1, 1), (2, 1)]);
        assert_eq!(midpoint_line(&line).as_slice(), expected.as_slice());
        assert_eq!(bresenham_line(&line).as_slice(), expected.as_slice());
    }

    #[test]
    fn test_tie_steep_takes_diagonal_step() {
        let line = LineSegment::from_coords(0, 0, -1, -2);
        let expected = pts(&[(0, 0), (-1, -1), (-1, -2)]);
        assert_eq!(midpoint_line(&line).as_slice(), expected.as_slice());
        assert_eq!(bresenham_line(&line).as_slice(), expected.as_slice());
    }

    #[test]
    fn test_dda_half_to_even_matches_reference() {
        // y increments by 0.5: cursor values 0, 0.5, 1.0, 1.5, 2.0
        let line = LineSegment::from_coords(0, 0, 4, 2);
        let even = dda_line_with(&line, RoundingMode::HalfToEven);
        assert_eq!(even.as_slice(), pts(&[(0, 0), (1, 0), (2, 1), (3, 2), (4, 2)]).as_slice());

        let away = dda_line_with(&line, RoundingMode::HalfAwayFromZero);
        assert_eq!(away.as_slice(), pts(&[(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]).as_slice());
    }

    #[test]
    fn test_dda_negative_direction() {
        let points = dda_line(&LineSegment::from_coords(0, 0, -6, -3));
        assert_eq!(points.len(), 7);
        assert_eq!(points.first(), Some(Point::new(0, 0)));
        assert_eq!(points.last(), Some(Point::new(-6, -3)));
    }

    #[test]
    fn test_extreme_endpoints_do_not_overflow() {
        let line = LineSegment::from_coords(i32::MAX - 3, i32::MIN, i32::MAX, i32::MIN + 2);
        let b = bresenham_line(&line);
        let m = midpoint_line(&line);
        assert_eq!(b, m);
        assert_eq!(b.last(), Some(line.end));
    }
}
