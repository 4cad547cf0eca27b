//! Least-cost paths across height grids.
//!
//! A [`HeightGrid`](ridgeway_core::HeightGrid) becomes a directed
//! 4-neighbour lattice [`Graph`] whose edge weights come from an
//! [`EdgeCost`] policy. Two engines answer queries over it:
//!
//! - **Dijkstra** single-source distances and predecessors
//!   ([`Graph::dijkstra`]), non-negative weights only
//! - **Floyd-Warshall** all-pairs distances and next hops
//!   ([`Graph::floyd_warshall`]), negative weights allowed
//!
//! [`find_route`] ties the steps together and returns the path, its cost and
//! a marked copy of the grid.
//!
//! # Cost policies
//!
//! | Policy | `diff > 0` | `diff ≤ 0` |
//! |---|---|---|
//! | [`CostPolicy::Ascent`] | `1 + diff²` | `1` |
//! | [`CostPolicy::Regenerative`] | `1 + diff²` | `1 + diff` |

mod dijkstra;
mod error;
mod floyd;
mod graph;
mod neighbors;
mod reconstruct;
mod route;
mod traits;
mod transform;

pub use dijkstra::{NO_VERTEX, ShortestPaths, UNREACHABLE};
pub use error::PathError;
pub use floyd::{AllPairs, FW_INFINITY};
pub use graph::{Edge, Graph};
pub use neighbors::Neighbors;
pub use reconstruct::{mark_path, path_cost, path_points};
pub use route::{Route, Solver, corner_route, find_route};
pub use traits::EdgeCost;
pub use transform::{CostPolicy, build_graph};
