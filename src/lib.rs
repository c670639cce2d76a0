//! Incremental planar Delaunay triangulation with derived proximity graphs.
//!
//! `proximity` maintains a 2D Delaunay triangulation under online insertion
//! and removal of sites, inside a caller-supplied bounding triangle. After
//! every mutation the engine also keeps three classic proximity structures
//! consistent with the current site set:
//!
//! - the **Gabriel graph** (edges whose diameter circle is empty),
//! - the **relative neighborhood graph** (edges whose lens is empty), and
//! - a **Euclidean minimum spanning tree**, rebuilt by a Kruskal sweep over
//!   the length-sorted RNG edges.
//!
//! These nest: EMST ⊆ RNG ⊆ Gabriel ⊆ Delaunay edges.
//!
//! Sites and triangles live in generational arenas; all adjacency is over
//! stable keys, and point identity is by coordinate value. Predicates use
//! plain `f64` arithmetic, so nearly degenerate inputs (for example four
//! nearly cocircular sites) may be classified inconsistently; the point
//! location walk recovers from the resulting cycles by falling back to a
//! full scan.
//!
//! # Examples
//!
//! ```
//! use proximity::core::Triangulation;
//! use proximity::geometry::Point;
//!
//! let bounding = [
//!     Point::new(-10_000.0, -10_000.0),
//!     Point::new(10_000.0, -10_000.0),
//!     Point::new(0.0, 10_000.0),
//! ];
//! let mut engine = Triangulation::new(bounding)?;
//! for p in [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)] {
//!     engine.insert(p)?;
//! }
//! // A unit square corner set triangulates into two real triangles once the
//! // fourth corner arrives.
//! engine.insert(Point::new(1.0, 1.0))?;
//! let real = engine
//!     .triangles()
//!     .filter(|&t| engine.touches_synthetic(t) == Some(false))
//!     .count();
//! assert_eq!(real, 2);
//! # Ok::<(), proximity::core::TriangulationError>(())
//! ```

#![forbid(unsafe_code)]

pub mod core;
pub mod geometry;

/// Commonly used types.
pub mod prelude {
    pub use crate::core::{Triangulation, TriangulationError};
    pub use crate::geometry::{Line, Point};
}
