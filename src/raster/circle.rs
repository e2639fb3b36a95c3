//! Circle rasterization: Bresenham and Midpoint.
//!
//! Both strategies walk the octant from `(0, r)` toward the diagonal `x == y`
//! and emit all eight symmetric images of every visited offset in a fixed
//! order. Seam pixels (`x == 0`, `x == y`) and the zero radius case therefore
//! repeat; the sequence is not de-duplicated.

use crate::contracts;
use crate::geometry::{Circle, Point, PointSequence};

/// Emit the eight symmetric images of `(x, y)` around `center`.
///
/// Order: `(+x,+y) (-x,+y) (+x,-y) (-x,-y) (+y,+x) (-y,+x) (+y,-x) (-y,-x)`.
#[inline]
fn push_octants(points: &mut PointSequence, center: Point, x: i64, y: i64) {
    // |x|, |y| <= r, and Circle::new guarantees center ± r fits in i32.
    let (x, y) = (x as i32, y as i32);
    points.push(center.offset(x, y));
    points.push(center.offset(-x, y));
    points.push(center.offset(x, -y));
    points.push(center.offset(-x, -y));
    points.push(center.offset(y, x));
    points.push(center.offset(-y, x));
    points.push(center.offset(y, -x));
    points.push(center.offset(-y, -x));
}

/// Number of octant iterations is about `r / sqrt(2) + 1`.
fn octant_capacity(radius: i64) -> usize {
    8 * (radius as usize * 3 / 4 + 2)
}

/// Bresenham's circle algorithm.
///
/// State `x = 0, y = r, d = 3 - 2r`. While `x <= y`: emit, then
/// `d += 4x + 6` if `d < 0`, else `d += 4(x - y) + 10` and step `y` inward.
#[must_use]
pub fn bresenham_circle(circle: &Circle) -> PointSequence {
    let center = circle.center();
    let r = i64::from(circle.radius());

    let mut x = 0_i64;
    let mut y = r;
    let mut d = 3 - 2 * r;
    let mut points = PointSequence::with_capacity(octant_capacity(r));

    while x <= y {
        push_octants(&mut points, center, x, y);

        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }

    debug_assert!(contracts::circle::is_eight_fold_symmetric(&points, center));
    points
}

/// Midpoint circle algorithm.
///
/// State `x = 0, y = r, p = 1 - r`. While `x <= y`: emit, then
/// `p += 2x + 3` if `p < 0`, else `p += 2(x - y) + 5` and step `y` inward.
#[must_use]
pub fn midpoint_circle(circle: &Circle) -> PointSequence {
    let center = circle.center();
    let r = i64::from(circle.radius());

    let mut x = 0_i64;
    let mut y = r;
    let mut p = 1 - r;
    let mut points = PointSequence::with_capacity(octant_capacity(r));

    while x <= y {
        push_octants(&mut points, center, x, y);

        if p < 0 {
            p += 2 * x + 3;
        } else {
            p += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }

    debug_assert!(contracts::circle::is_eight_fold_symmetric(&points, center));
    points
}
