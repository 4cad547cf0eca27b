//! Fractal terrain for ridgeway.
//!
//! [`DemGen`] produces a digital elevation model (a
//! [`HeightGrid`](ridgeway_core::HeightGrid)) by midpoint displacement: the
//! four corners are seeded around height 50, then each square is subdivided,
//! its centre and edge midpoints set to the average of its corners plus
//! noise whose amplitude halves at every level. Heights are clamped to
//! `[0, 99]` at the end.
//!
//! The random source is always injected, so a seeded RNG reproduces the
//! same terrain.

mod dem;
mod error;

pub use dem::{DemConfig, DemGen};
pub use error::DemError;
