//! Per-vertex polygon expansion.
//!
//! Every vertex is pushed along the ray centroid→vertex by a Euclidean
//! distance `|delta|`: outward for `delta > 0`, inward for `delta < 0`.
//! This is a radial nudge, not a polygon offset: edges are not kept parallel
//! and non-convex shapes can fold. It works the same for any vertex count.

use nalgebra::Vector2;

use crate::point::Point;
use crate::polygon::compute_centroid;

/// Sign in {-1, 0, 1}. Zero and NaN map to 0 (unlike `f64::signum`).
#[inline]
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Move `p` by `delta` along the axis `p - centroid`.
///
/// The displacement magnitudes come from the axis ratio `r = axis.x / axis.y`:
/// `dy = sqrt(delta² / (1 + r²))`, `dx = r * dy`, so `|(dx, dy)| = |delta|`.
/// Signs are taken per coordinate from the axis (and from `delta`).
///
/// A vertex with `axis.y == 0` makes `r` non-finite: its `x` comes back NaN
/// and its `y` is unchanged. A vertex sitting on the centroid comes back NaN
/// in both coordinates.
pub fn shift_along_axis(p: Point, centroid: Point, delta: f64) -> Point {
    let axis = p - centroid;
    let sign_x = sign(axis.x) * sign(delta);
    let sign_y = sign(axis.y) * sign(delta);

    let r = axis.x / axis.y;
    let dy = (delta * delta / (1.0 + r * r)).sqrt();
    let dx = r * dy;
    if !(dx.is_finite() && dy.is_finite()) {
        tracing::trace!(x = p.x, y = p.y, "expansion axis is degenerate");
    }
    p + Vector2::new(dx.abs() * sign_x, dy.abs() * sign_y)
}

fn expand_triangle(points: &[Point], delta: f64) -> Vec<Point> {
    let centroid = compute_centroid(points);
    points
        .iter()
        .map(|&p| shift_along_axis(p, centroid, delta))
        .collect()
}

/// Expand (`delta > 0`) or shrink (`delta < 0`) a polygon by shifting each
/// vertex `|delta|` along its centroid→vertex axis. The input is untouched.
///
/// Uses [`compute_centroid`], so the same positive-quadrant caveat applies.
#[inline]
pub fn expand_polygon(points: &[Point], delta: f64) -> Vec<Point> {
    expand_triangle(points, delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn zero_delta_is_identity() {
        let sq = square();
        let out = expand_polygon(&sq, 0.0);
        for (a, b) in sq.iter().zip(&out) {
            assert!(a.distance(*b) < 1e-12);
        }
    }

    #[test]
    fn square_moves_outward_by_delta() {
        let sq = square();
        let c = Point::new(5.0, 5.0);
        let d = 2.0;
        let out = expand_polygon(&sq, d);
        assert_eq!(out.len(), sq.len());
        for (a, b) in sq.iter().zip(&out) {
            assert!((a.distance(*b) - d).abs() < 1e-12);
            assert!(b.distance(c) > a.distance(c));
        }
        let h = d / 2f64.sqrt();
        assert!(out[0].distance(Point::new(-h, -h)) < 1e-12);
        assert!(out[2].distance(Point::new(10.0 + h, 10.0 + h)) < 1e-12);
    }

    #[test]
    fn negative_delta_moves_inward() {
        let sq = square();
        let c = Point::new(5.0, 5.0);
        let out = expand_polygon(&sq, -1.0);
        for (a, b) in sq.iter().zip(&out) {
            assert!((a.distance(*b) - 1.0).abs() < 1e-12);
            assert!(b.distance(c) < a.distance(c));
        }
    }

    #[test]
    fn vertical_axis_shifts_only_y() {
        let p = shift_along_axis(Point::new(5.0, 0.0), Point::new(5.0, 5.0), 3.0);
        assert!(p.distance(Point::new(5.0, -3.0)) < 1e-12);
    }

    #[test]
    fn horizontal_axis_degenerates_that_vertex_only() {
        // Diamond: left/right vertices share the centroid's y.
        let diamond = vec![
            Point::new(5.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 10.0),
            Point::new(0.0, 5.0),
        ];
        let out = expand_polygon(&diamond, 1.0);
        assert!(out[0].is_finite());
        assert!(out[2].is_finite());
        assert!(out[1].x.is_nan());
        assert!(out[3].x.is_nan());
        assert_eq!(out[1].y, 5.0);
    }

    #[test]
    fn input_is_not_mutated() {
        let sq = square();
        let copy = sq.clone();
        let _ = expand_polygon(&sq, 4.0);
        assert_eq!(sq, copy);
    }
}
