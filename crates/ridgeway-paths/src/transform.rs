//! Height grid to graph transform.
//!
//! Every cell becomes the vertex `x * size + y` and gets one outgoing edge
//! per in-bounds cardinal neighbour. The weight of a step depends only on the
//! height difference `h(neighbour) - h(cell)` and the chosen [`EdgeCost`].

use ridgeway_core::HeightGrid;

use crate::error::PathError;
use crate::graph::Graph;
use crate::neighbors::Neighbors;
use crate::traits::EdgeCost;

/// The two built-in cost policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostPolicy {
    /// Climbing costs `1 + diff²`; flat or downhill steps cost `1`.
    /// Every weight is at least 1.
    Ascent,
    /// Climbing costs `1 + diff²`; downhill steps cost `1 + diff`, which is
    /// negative for drops steeper than 1 (energy recovered on descent).
    Regenerative,
}

impl CostPolicy {
    /// Map the "allow negative weights" flag onto a policy.
    pub fn from_negative_flag(allow_negative: bool) -> Self {
        if allow_negative {
            Self::Regenerative
        } else {
            Self::Ascent
        }
    }
}

impl EdgeCost for CostPolicy {
    fn cost(&self, diff: i32) -> i32 {
        if diff > 0 {
            return 1 + diff * diff;
        }
        match self {
            Self::Ascent => 1,
            Self::Regenerative => 1 + diff,
        }
    }

    fn allows_negative(&self) -> bool {
        matches!(self, Self::Regenerative)
    }
}

/// Build the 4-neighbour lattice graph of `grid` under `policy`.
pub fn build_graph<C: EdgeCost + ?Sized>(
    grid: &HeightGrid,
    policy: &C,
) -> Result<Graph, PathError> {
    let mut graph = Graph::new(grid.len());
    let bounds = grid.bounds();
    let mut nb = Neighbors::new();

    for (p, h) in grid.iter() {
        let Some(from) = grid.vertex(p) else {
            continue;
        };
        for &q in nb.cardinal(p, |q| bounds.contains(q)) {
            let (Some(to), Some(hq)) = (grid.vertex(q), grid.at(q)) else {
                continue;
            };
            graph.add_edge(from, to, policy.cost(hq - h))?;
        }
    }

    log::debug!(
        "built {}x{} terrain graph: {} vertices, {} edges",
        grid.size(),
        grid.size(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
