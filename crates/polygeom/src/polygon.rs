//! Polygon container, signed area, winding and centroid.
//!
//! Assumptions and conventions
//! - A polygon is an ordered list of points; order defines the edges and the
//!   winding. The closing edge (last → first) is always included: each loop
//!   walks `i` forward while `j` trails one step behind, starting at `len - 1`.
//! - No minimum length is enforced. Fewer than three points, collinear points
//!   or non-finite coordinates give zero or non-finite results, never a panic.
//! - Signed area is positive for clockwise winding in image coordinates
//!   (`y` down), i.e. counterclockwise in the usual math orientation is
//!   negative here.

use crate::point::Point;

/// Winding direction derived from the sign of [`compute_area`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    /// Zero or non-finite signed area.
    Degenerate,
}

/// Ordered point sequence. Holds data only; all geometry lives in the free
/// functions below, which the methods forward to.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build from interleaved coordinates `[x0, y0, x1, y1, ..]`.
    /// Returns `None` if the slice has odd length.
    pub fn from_flat(coords: &[f64]) -> Option<Self> {
        if coords.len() % 2 != 0 {
            return None;
        }
        Some(
            coords
                .chunks_exact(2)
                .map(|c| Point::new(c[0], c[1]))
                .collect(),
        )
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Same vertices in reverse order (flips the winding).
    pub fn reversed(&self) -> Self {
        self.points.iter().rev().copied().collect()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        compute_area(&self.points)
    }

    #[inline]
    pub fn is_clockwise(&self) -> bool {
        is_clockwise(&self.points)
    }

    #[inline]
    pub fn winding(&self) -> Winding {
        winding(&self.points)
    }

    #[inline]
    pub fn centroid(&self) -> Point {
        compute_centroid(&self.points)
    }

    /// See [`crate::expand::expand_polygon`].
    #[inline]
    pub fn expand(&self, delta: f64) -> Polygon {
        Polygon::new(crate::expand::expand_polygon(&self.points, delta))
    }
}

impl From<Vec<Point>> for Polygon {
    #[inline]
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Signed shoelace area of the closed polygon `points`.
///
/// Accumulates the trapezoid term `(x_j + x_i) * (y_i - y_j)` over every edge
/// `j → i` and halves the total. Positive means clockwise on screen (y down),
/// negative counterclockwise, zero degenerate. Empty, single-point and
/// two-point inputs return `0.0`.
///
/// The annotation layer this was ported from accumulates `(y_j - y_i)` and so
/// reports the opposite sign (and the opposite `is_clockwise`) for every
/// polygon. Negate when comparing against values it produced.
pub fn compute_area(points: &[Point]) -> f64 {
    let mut area = 0.0;
    let mut j = points.len().wrapping_sub(1);
    for (i, pi) in points.iter().enumerate() {
        let pj = points[j];
        area += (pj.x + pi.x) * (pi.y - pj.y);
        j = i;
    }
    area / 2.0
}

/// `true` iff the signed area is strictly positive. Degenerate is not clockwise.
#[inline]
pub fn is_clockwise(points: &[Point]) -> bool {
    compute_area(points) > 0.0
}

pub fn winding(points: &[Point]) -> Winding {
    let a = compute_area(points);
    if a > 0.0 {
        Winding::Clockwise
    } else if a < 0.0 {
        Winding::CounterClockwise
    } else {
        Winding::Degenerate
    }
}

/// Cross-term accumulators `(Σ (x_i + x_j) f, Σ (y_i + y_j) f)` with
/// `f = x_i y_j - x_j y_i`, over all edges `j → i`.
fn centroid_moments(points: &[Point]) -> (f64, f64) {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut j = points.len().wrapping_sub(1);
    for (i, pi) in points.iter().enumerate() {
        let pj = points[j];
        let f = pi.x * pj.y - pj.x * pi.y;
        x += (pi.x + pj.x) * f;
        y += (pi.y + pj.y) * f;
        j = i;
    }
    (x, y)
}

/// Area-weighted centroid, with the absolute value taken per coordinate.
///
/// Correct for polygons whose centroid lies in the positive quadrant, which is
/// always the case for annotations on an image. For shapes reaching into
/// negative coordinates each axis is folded to its magnitude, so the result
/// can be mirrored; use [`signed_centroid`] there.
///
/// Zero signed area divides by zero: the result is NaN or ±∞ per coordinate.
pub fn compute_centroid(points: &[Point]) -> Point {
    let (x, y) = centroid_moments(points);
    let f = compute_area(points) * 6.0;
    if f == 0.0 {
        tracing::debug!(n = points.len(), "centroid of zero-area polygon is undefined");
    }
    Point::new((x / f).abs(), (y / f).abs())
}

/// Area-weighted centroid without sign folding. `None` for zero or non-finite area.
pub fn signed_centroid(points: &[Point]) -> Option<Point> {
    let a = compute_area(points);
    if a == 0.0 || !a.is_finite() {
        return None;
    }
    let (x, y) = centroid_moments(points);
    // The moments use the opposite cross-product orientation to `compute_area`.
    let f = -a * 6.0;
    Some(Point::new(x / f, y / f))
}
