//! Unordered line segments with a length-first total order.

use crate::geometry::point::Point;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An undirected segment between two [`Point`]s.
///
/// Endpoints are canonicalized at construction (lexicographically smaller
/// point first), so `{a, b}` and `{b, a}` compare and hash identically. The
/// `Ord` implementation sorts by Euclidean length first, then endpoint
/// coordinates, giving the deterministic sweep order the spanning-tree
/// computation relies on.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Line {
    a: Point,
    b: Point,
}

impl Line {
    /// Creates a segment between `p` and `q`, in canonical endpoint order.
    #[must_use]
    pub fn new(p: Point, q: Point) -> Self {
        if lex_cmp(p, q) == Ordering::Greater {
            Self { a: q, b: p }
        } else {
            Self { a: p, b: q }
        }
    }

    /// The lexicographically smaller endpoint.
    #[inline]
    #[must_use]
    pub const fn a(&self) -> Point {
        self.a
    }

    /// The lexicographically larger endpoint.
    #[inline]
    #[must_use]
    pub const fn b(&self) -> Point {
        self.b
    }

    /// Euclidean length of the segment.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }
}

fn lex_cmp(p: Point, q: Point) -> Ordering {
    p.x.total_cmp(&q.x).then_with(|| p.y.total_cmp(&q.y))
}

impl PartialEq for Line {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }
}

impl Eq for Line {}

impl PartialOrd for Line {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Line {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length()
            .total_cmp(&other.length())
            .then_with(|| self.a.x.total_cmp(&other.a.x))
            .then_with(|| self.a.y.total_cmp(&other.a.y))
            .then_with(|| self.b.x.total_cmp(&other.b.x))
            .then_with(|| self.b.y.total_cmp(&other.b.y))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn endpoint_order_is_canonical() {
        let p = Point::new(2.0, 0.0);
        let q = Point::new(-1.0, 5.0);
        let forward = Line::new(p, q);
        let backward = Line::new(q, p);
        assert_eq!(forward, backward);
        assert_eq!(forward.a(), q);
        assert_eq!(forward.b(), p);
    }

    #[test]
    fn ordering_is_by_length_first() {
        let short = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let long = Line::new(Point::new(100.0, 100.0), Point::new(100.0, 110.0));
        assert!(short < long);

        // Equal lengths fall back to endpoint coordinates, keeping distinct
        // segments distinct in a sorted set.
        let other = Line::new(Point::new(0.0, 1.0), Point::new(1.0, 1.0));
        assert_ne!(short, other);
        assert_eq!(short.cmp(&other), Ordering::Less);
    }

    #[test]
    fn sorted_set_yields_shortest_first() {
        let mut pool = BTreeSet::new();
        pool.insert(Line::new(Point::new(0.0, 0.0), Point::new(3.0, 0.0)));
        pool.insert(Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0)));
        pool.insert(Line::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0)));
        let lengths: Vec<f64> = pool.iter().map(Line::length).collect();
        assert_eq!(lengths, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn duplicate_segments_collapse() {
        let mut pool = BTreeSet::new();
        let p = Point::new(0.0, 0.0);
        let q = Point::new(1.0, 2.0);
        pool.insert(Line::new(p, q));
        pool.insert(Line::new(q, p));
        assert_eq!(pool.len(), 1);
    }
}
