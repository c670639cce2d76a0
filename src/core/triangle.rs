//! Arena records for sites and triangles.

use crate::geometry::Point;
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

new_key_type! {
    /// Stable arena key for a [`Site`].
    pub struct SiteKey;
}

new_key_type! {
    /// Stable arena key for a [`Triangle`].
    pub struct TriangleKey;
}

/// A triangulation vertex stored in the site arena.
///
/// `synthetic` marks the three bounding-triangle corners, which exist only to
/// keep every real site inside some triangle. Derived-graph queries and
/// display layers filter on this flag rather than on coordinate values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Site {
    /// Position of the site.
    pub point: Point,
    /// True for the three bounding-triangle corners.
    pub synthetic: bool,
}

/// Errors from triangle-local vertex and facet operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TriangleError {
    /// `vertex_excluding` excluded every vertex of the triangle.
    #[error("all three triangle vertices were excluded")]
    NoVertexRemaining,
    /// The named vertex is not a vertex of this triangle.
    #[error("site {vertex:?} is not a vertex of this triangle")]
    VertexNotInTriangle {
        /// The offending site key.
        vertex: SiteKey,
    },
}

/// A triangle stored in the triangle arena.
///
/// Identity is the arena key, never the vertex set; re-creating a triangle
/// after a cavity retriangulation yields a fresh key. The circumcenter is
/// computed once at construction, since the Voronoi query and the
/// derived-graph repair scans both read it repeatedly.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    vertices: [SiteKey; 3],
    circumcenter: Point,
}

impl Triangle {
    /// Creates a triangle from its vertex keys and precomputed circumcenter.
    #[must_use]
    pub const fn new(vertices: [SiteKey; 3], circumcenter: Point) -> Self {
        Self {
            vertices,
            circumcenter,
        }
    }

    /// The three vertex keys, in construction order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [SiteKey; 3] {
        self.vertices
    }

    /// Circumcenter memoized at construction.
    #[inline]
    #[must_use]
    pub const fn circumcenter(&self) -> Point {
        self.circumcenter
    }

    /// True iff `vertex` is a vertex of this triangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, vertex: SiteKey) -> bool {
        self.vertices.contains(&vertex)
    }

    /// True iff any key in `vertices` is a vertex of this triangle.
    #[must_use]
    pub fn contains_any<I: IntoIterator<Item = SiteKey>>(&self, vertices: I) -> bool {
        vertices.into_iter().any(|v| self.contains(v))
    }

    /// True iff any vertex of this triangle is a synthetic bounding corner.
    ///
    /// Vertices whose site record is missing from the arena count as
    /// synthetic; that only happens mid-mutation and such triangles must not
    /// be treated as real.
    #[must_use]
    pub fn touches_synthetic(&self, sites: &SlotMap<SiteKey, Site>) -> bool {
        self.vertices
            .iter()
            .any(|&v| sites.get(v).is_none_or(|site| site.synthetic))
    }

    /// Some vertex of this triangle not listed in `excluded`.
    ///
    /// # Errors
    ///
    /// Returns [`TriangleError::NoVertexRemaining`] when `excluded` covers all
    /// three vertices.
    pub fn vertex_excluding(&self, excluded: &[SiteKey]) -> Result<SiteKey, TriangleError> {
        self.vertices
            .iter()
            .copied()
            .find(|v| !excluded.contains(v))
            .ok_or(TriangleError::NoVertexRemaining)
    }

    /// The facet (vertex pair) opposite `vertex`, in canonical key order.
    ///
    /// # Errors
    ///
    /// Returns [`TriangleError::VertexNotInTriangle`] when `vertex` is not a
    /// vertex of this triangle.
    pub fn facet_opposite(&self, vertex: SiteKey) -> Result<[SiteKey; 2], TriangleError> {
        let index = self
            .vertices
            .iter()
            .position(|&v| v == vertex)
            .ok_or(TriangleError::VertexNotInTriangle { vertex })?;
        Ok(canonical_facet(
            self.vertices[(index + 1) % 3],
            self.vertices[(index + 2) % 3],
        ))
    }

    /// The three facets of this triangle, each in canonical key order.
    #[must_use]
    pub fn facets(&self) -> [[SiteKey; 2]; 3] {
        [
            canonical_facet(self.vertices[1], self.vertices[2]),
            canonical_facet(self.vertices[2], self.vertices[0]),
            canonical_facet(self.vertices[0], self.vertices[1]),
        ]
    }

    /// True iff `self` and `other` share exactly one facet (two vertices).
    #[must_use]
    pub fn is_neighbor_of(&self, other: &Self) -> bool {
        let shared = self
            .vertices
            .iter()
            .filter(|v| other.contains(**v))
            .count();
        shared == 2
    }
}

#[inline]
fn canonical_facet(a: SiteKey, b: SiteKey) -> [SiteKey; 2] {
    if a < b { [a, b] } else { [b, a] }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: usize) -> (SlotMap<SiteKey, Site>, Vec<SiteKey>) {
        let mut sites = SlotMap::with_key();
        let keys = (0..n)
            .map(|i| {
                sites.insert(Site {
                    point: Point::new(i as f64, 0.0),
                    synthetic: false,
                })
            })
            .collect();
        (sites, keys)
    }

    #[test]
    fn membership_queries() {
        let (_, k) = keys(4);
        let tri = Triangle::new([k[0], k[1], k[2]], Point::default());
        assert!(tri.contains(k[1]));
        assert!(!tri.contains(k[3]));
        assert!(tri.contains_any([k[3], k[2]]));
        assert!(!tri.contains_any([k[3]]));
    }

    #[test]
    fn vertex_excluding_skips_listed_keys() {
        let (_, k) = keys(3);
        let tri = Triangle::new([k[0], k[1], k[2]], Point::default());
        assert_eq!(tri.vertex_excluding(&[k[0], k[1]]), Ok(k[2]));
        assert_eq!(
            tri.vertex_excluding(&[k[0], k[1], k[2]]),
            Err(TriangleError::NoVertexRemaining)
        );
    }

    #[test]
    fn facet_opposite_each_vertex() {
        let (_, k) = keys(4);
        let tri = Triangle::new([k[0], k[1], k[2]], Point::default());
        let facet = tri.facet_opposite(k[0]).unwrap();
        assert!(!facet.contains(&k[0]));
        assert!(facet.contains(&k[1]) && facet.contains(&k[2]));
        assert_eq!(
            tri.facet_opposite(k[3]),
            Err(TriangleError::VertexNotInTriangle { vertex: k[3] })
        );
    }

    #[test]
    fn facets_are_canonical_and_cover_all_pairs() {
        let (_, k) = keys(3);
        let forward = Triangle::new([k[0], k[1], k[2]], Point::default());
        let reversed = Triangle::new([k[2], k[1], k[0]], Point::default());
        let mut a = forward.facets();
        let mut b = reversed.facets();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn neighbor_detection_requires_exactly_two_shared_vertices() {
        let (_, k) = keys(5);
        let tri = Triangle::new([k[0], k[1], k[2]], Point::default());
        let adjacent = Triangle::new([k[1], k[2], k[3]], Point::default());
        let corner_only = Triangle::new([k[2], k[3], k[4]], Point::default());
        assert!(tri.is_neighbor_of(&adjacent));
        assert!(!tri.is_neighbor_of(&corner_only));
        assert!(!tri.is_neighbor_of(&tri)); // shares 3, not a neighbor
    }

    #[test]
    fn synthetic_flag_detection() {
        let (mut sites, k) = keys(3);
        let tri = Triangle::new([k[0], k[1], k[2]], Point::default());
        assert!(!tri.touches_synthetic(&sites));
        sites[k[1]].synthetic = true;
        assert!(tri.touches_synthetic(&sites));
    }
}
