//! Core data structures and the triangulation engine.

pub mod disjoint_set;
pub mod graph;
pub mod triangle;
pub mod triangulation;

pub use disjoint_set::DisjointSet;
pub use graph::Graph;
pub use triangle::{Site, SiteKey, Triangle, TriangleError, TriangleKey};
pub use triangulation::{Triangulation, TriangulationError};
