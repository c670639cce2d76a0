//! Geometric primitives and predicates.

pub mod line;
pub mod point;
pub mod predicates;

pub use line::Line;
pub use point::{Point, Vector};
pub use predicates::{CircumcirclePosition, GeometryError, Orientation};
