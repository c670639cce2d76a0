//! The `Point` value type for planar coordinates.
//!
//! Points are plain `f64` coordinate pairs in the caller's coordinate space.
//! Equality and hashing are by coordinate *bit value*, so a `Point` can serve
//! as a hash-map key and two points with equal coordinates always denote the
//! same site. The engine never transforms coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable 2D point.
///
/// # Examples
///
/// ```
/// use proximity::geometry::Point;
///
/// let p = Point::new(3.0, 4.0);
/// let q = Point::new(0.0, 0.0);
/// assert_eq!(p.distance(q), 5.0);
/// assert_eq!(p.midpoint(q), Point::new(1.5, 2.0));
/// ```
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

/// Displacement between two [`Point`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    /// The x component.
    pub dx: f64,
    /// The y component.
    pub dy: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate along `axis` (0 = x, 1 = y).
    ///
    /// # Panics
    ///
    /// Panics if `axis > 1`.
    #[inline]
    #[must_use]
    pub fn coord(&self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => panic!("planar point has no axis {axis}"),
        }
    }

    /// Euclidean distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance(&self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Midpoint of the segment from `self` to `other`.
    #[inline]
    #[must_use]
    pub fn midpoint(&self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Displacement vector from `other` to `self`.
    #[inline]
    #[must_use]
    pub fn sub(&self, other: Self) -> Vector {
        Vector {
            dx: self.x - other.x,
            dy: self.y - other.y,
        }
    }

    /// Angle of the ray from `self` towards `other`, in radians.
    ///
    /// Unnormalized, the result is in `(-π, π]` as returned by `atan2`; with
    /// `normalized` set it is shifted into `[0, 2π)`, which is what arc
    /// drawing code typically wants.
    #[must_use]
    pub fn angle_to(&self, other: Self, normalized: bool) -> f64 {
        let raw = (other.y - self.y).atan2(other.x - self.x);
        if normalized && raw < 0.0 {
            raw + 2.0 * std::f64::consts::PI
        } else {
            raw
        }
    }
}

impl Vector {
    /// Euclidean length of the vector.
    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

// Bit-level equality keeps Eq, Hash, and the sorted-edge ordering mutually
// consistent, including for NaN coordinates that should never occur but must
// not break collection invariants if they do.
impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::hash_map::DefaultHasher;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn hash_of(p: Point) -> u64 {
        let mut hasher = DefaultHasher::new();
        p.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_and_hash_are_by_coordinate_value() {
        let p = Point::new(1.5, -2.25);
        let q = Point::new(1.5, -2.25);
        assert_eq!(p, q);
        assert_eq!(hash_of(p), hash_of(q));
        assert_ne!(p, Point::new(1.5, -2.0));
    }

    #[test]
    fn distance_and_midpoint() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(3.0, 4.0);
        assert_relative_eq!(p.distance(q), 5.0);
        assert_eq!(p.midpoint(q), Point::new(1.5, 2.0));
        assert_eq!(p.midpoint(q), q.midpoint(p));
    }

    #[test]
    fn vector_magnitude() {
        let v = Point::new(5.0, 7.0).sub(Point::new(2.0, 3.0));
        assert_relative_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn coord_accessor() {
        let p = Point::new(-1.0, 9.0);
        assert_eq!(p.coord(0), -1.0);
        assert_eq!(p.coord(1), 9.0);
    }

    #[test]
    fn angle_normalization() {
        let origin = Point::new(0.0, 0.0);
        assert_relative_eq!(origin.angle_to(Point::new(0.0, 1.0), false), FRAC_PI_2);
        let down = origin.angle_to(Point::new(0.0, -1.0), true);
        assert_relative_eq!(down, 3.0 * FRAC_PI_2);
        assert!(origin.angle_to(Point::new(-1.0, 0.0), true) <= PI + 1e-12);
    }
}
