//! Fundamental planar geometry for bridge modelling.

use nalgebra::Vector2;

/// Position in the two dimensional level plane, in level distance units.
///
/// The Y axis points down, matching screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Distance along the global X axis.
    pub x: f64,
    /// Distance along the global Y axis.
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use bridgewright::point;
///
/// let origin = point(0.0, 0.0);
/// assert_eq!(origin.x, 0.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (b.to_vector() - a.to_vector()).norm()
}

/// Distance from `p` to the segment `start`-`end`, clamped to the segment
/// rather than the infinite line.
#[must_use]
pub fn segment_distance(p: Point, start: Point, end: Point) -> f64 {
    let ab = end.to_vector() - start.to_vector();
    let ap = p.to_vector() - start.to_vector();
    let length_sq = ab.norm_squared();
    if length_sq == 0.0 {
        return ap.norm();
    }
    let t = (ap.dot(&ab) / length_sq).clamp(0.0, 1.0);
    (ap - ab * t).norm()
}

/// Snap a position to the nearest multiple of `spacing`, independently on
/// each axis.
#[must_use]
pub fn snap_to_grid(p: Point, spacing: f64) -> Point {
    Point::new(
        (p.x / spacing).round() * spacing,
        (p.y / spacing).round() * spacing,
    )
}
