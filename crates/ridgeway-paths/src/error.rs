use std::fmt;

use ridgeway_core::GridError;

/// Errors reported by graph construction and the shortest-path engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A vertex index at or beyond the graph's vertex count.
    VertexOutOfRange { vertex: usize, vertex_count: usize },
    /// Dijkstra was handed a graph containing a negative edge.
    NegativeWeight { from: usize, to: usize, weight: i32 },
    /// Dijkstra's bookkeeping claimed unvisited vertices remained but the
    /// minimum scan found none.
    NoUnvisitedVertex { remaining: usize },
    /// A next-hop walk entered a negative cycle or did not reach its
    /// destination within `V` hops.
    CorruptNextHop { from: usize, to: usize },
    /// No path connects the two vertices.
    Unreachable { from: usize, to: usize },
    /// An endpoint did not address a grid cell.
    Grid(GridError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexOutOfRange {
                vertex,
                vertex_count,
            } => write!(f, "vertex {vertex} out of range for {vertex_count} vertices"),
            Self::NegativeWeight { from, to, weight } => write!(
                f,
                "edge {from} -> {to} has negative weight {weight}; dijkstra requires non-negative weights"
            ),
            Self::NoUnvisitedVertex { remaining } => write!(
                f,
                "dijkstra invariant violated: {remaining} vertices unvisited but none found"
            ),
            Self::CorruptNextHop { from, to } => {
                write!(f, "next-hop walk from {from} to {to} does not terminate")
            }
            Self::Unreachable { from, to } => write!(f, "no path from {from} to {to}"),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PathError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
