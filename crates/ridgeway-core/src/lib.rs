//! **ridgeway-core**: shared types for least-cost routing over terrain.
//!
//! This crate provides the geometry primitives and the validated height grid
//! consumed by `ridgeway-paths`, along with the marked copy that carries a
//! reconstructed path back out to renderers.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{HeightGrid, MAX_HEIGHT, MIN_HEIGHT, MarkedGrid, OFF};
