//! Floating-point geometric predicates for the planar engine.
//!
//! All tests here use straight `f64` arithmetic with strict comparisons and no
//! epsilon guards. Near-degenerate input (four nearly cocircular sites, a query
//! point almost exactly on an edge) can therefore be classified inconsistently;
//! the engine absorbs that with its brute-force location fallback rather than
//! attempting exact arithmetic. Swapping in robust predicates would only touch
//! this module.

use crate::geometry::point::Point;
use thiserror::Error;

/// Errors produced by geometric constructions.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum GeometryError {
    /// The three points are collinear and admit no circumcircle.
    #[error("collinear points have no circumcenter: {a}, {b}, {c}")]
    CollinearPoints {
        /// First point.
        a: Point,
        /// Second point.
        b: Point,
        /// Third point.
        c: Point,
    },
}

/// Orientation of an ordered point triple.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Orientation {
    /// Positive signed area (left turn).
    CounterClockwise,
    /// Negative signed area (right turn).
    Clockwise,
    /// Zero signed area.
    Degenerate,
}

/// Position of a query point relative to a triangle's circumcircle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CircumcirclePosition {
    /// Strictly inside the circumcircle.
    Inside,
    /// Exactly on the circumcircle (up to floating-point evaluation).
    On,
    /// Strictly outside the circumcircle.
    Outside,
}

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive for a counter-clockwise triple.
#[inline]
#[must_use]
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Classifies the orientation of `(a, b, c)`.
#[inline]
#[must_use]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let area = signed_area(a, b, c);
    if area > 0.0 {
        Orientation::CounterClockwise
    } else if area < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Degenerate
    }
}

/// Signed orientation of `point` relative to each edge of `simplex`.
///
/// Entry `i` is the signed area of `(simplex[(i+1)%3], simplex[(i+2)%3],
/// point)`, i.e. the edge *opposite* vertex `i`. Comparing the sign patterns
/// of two query points against the same simplex tells whether the segment
/// between them crosses a simplex edge.
#[must_use]
pub fn relation_to(point: Point, simplex: &[Point; 3]) -> [f64; 3] {
    [
        signed_area(simplex[1], simplex[2], point),
        signed_area(simplex[2], simplex[0], point),
        signed_area(simplex[0], simplex[1], point),
    ]
}

/// Reports which vertex of the triangle the query point has "crossed away
/// from", if any.
///
/// Returns `Some(i)` when `point` lies strictly on the far side of the edge
/// opposite vertex `i` — the edge a directed point-location walk should step
/// through. Returns `None` when the point is inside the triangle or on its
/// boundary.
#[must_use]
pub fn vertex_opposite_crossed_edge(point: Point, vertices: &[Point; 3]) -> Option<usize> {
    for i in 0..3 {
        let e0 = vertices[(i + 1) % 3];
        let e1 = vertices[(i + 2) % 3];
        let query_side = signed_area(e0, e1, point);
        let vertex_side = signed_area(e0, e1, vertices[i]);
        // Strictly opposite sides only; a point on the edge line is not
        // "outside" through that edge.
        if query_side * vertex_side < 0.0 {
            return Some(i);
        }
    }
    None
}

/// Classifies `point` against the circumcircle of `vertices`.
///
/// Uses the standard lifting-map determinant over coordinates translated to
/// the query point, normalized by the triangle's orientation so the vertex
/// order does not matter. This is the core Delaunay test.
#[must_use]
pub fn circumcircle_position(point: Point, vertices: &[Point; 3]) -> CircumcirclePosition {
    let ax = vertices[0].x - point.x;
    let ay = vertices[0].y - point.y;
    let bx = vertices[1].x - point.x;
    let by = vertices[1].y - point.y;
    let cx = vertices[2].x - point.x;
    let cy = vertices[2].y - point.y;

    let a_lift = ax * ax + ay * ay;
    let b_lift = bx * bx + by * by;
    let c_lift = cx * cx + cy * cy;

    // Positive iff `point` is inside the circumcircle of a CCW triple.
    let det = ax * (by * c_lift - cy * b_lift) - ay * (bx * c_lift - cx * b_lift)
        + a_lift * (bx * cy - cx * by);
    let oriented = det * signed_area(vertices[0], vertices[1], vertices[2]).signum();

    if oriented > 0.0 {
        CircumcirclePosition::Inside
    } else if oriented < 0.0 {
        CircumcirclePosition::Outside
    } else {
        CircumcirclePosition::On
    }
}

/// True iff `point` lies strictly inside the circle at `center` with `radius`.
#[inline]
#[must_use]
pub fn in_circle(point: Point, center: Point, radius: f64) -> bool {
    point.distance(center) < radius
}

/// Circumcenter of the triangle `(a, b, c)`.
///
/// # Errors
///
/// Returns [`GeometryError::CollinearPoints`] when the points have no
/// circumcircle.
pub fn circumcenter(a: Point, b: Point, c: Point) -> Result<Point, GeometryError> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d == 0.0 {
        return Err(GeometryError::CollinearPoints { a, b, c });
    }
    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    Ok(Point::new(ux, uy))
}
