//! Distance and interpolation helpers.

use glam::DVec2;

/// A point in viewport pixel space. Origin is top-left, y grows downward.
pub type Point = DVec2;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Linear interpolation between two scalars. `t` is not clamped.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linear interpolation between two points. `t` is not clamped.
pub fn lerp_point(start: Point, end: Point, t: f64) -> Point {
    Point::new(lerp(start.x, end.x, t), lerp(start.y, end.y, t))
}
