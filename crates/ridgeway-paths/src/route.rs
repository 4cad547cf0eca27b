//! End-to-end route queries: build the graph, solve, reconstruct, mark.

use std::fmt;

use ridgeway_core::{HeightGrid, MarkedGrid, Point};

use crate::error::PathError;
use crate::reconstruct::{mark_path, path_points};
use crate::transform::{CostPolicy, build_graph};

/// Which shortest-path engine answers a route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Solver {
    /// Single-source Dijkstra; needs a non-negative cost policy.
    Dijkstra,
    /// All-pairs Floyd-Warshall; accepts negative weights.
    FloydWarshall,
}

impl Solver {
    /// The cost policy this solver is normally paired with.
    pub fn default_policy(self) -> CostPolicy {
        match self {
            Self::Dijkstra => CostPolicy::Ascent,
            Self::FloydWarshall => CostPolicy::Regenerative,
        }
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dijkstra => write!(f, "Dijkstra's Shortest Path"),
            Self::FloydWarshall => write!(f, "Floyd-Warshall's Shortest Path"),
        }
    }
}

/// A least-cost route across a height grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Vertex indices from start to goal, both included.
    pub vertices: Vec<usize>,
    /// The same path as grid cells.
    pub cells: Vec<Point>,
    /// Total energy cost; negative when descents recover more than the
    /// rest of the route spends.
    pub cost: i64,
    /// Copy of the grid with the route's cells set to `OFF`.
    pub marked: MarkedGrid,
}

impl Route {
    /// Number of steps (cells minus one).
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
}

/// Find the least-cost route from `from` to `to`.
///
/// A fresh graph is built from `grid` under `policy` for every call, and all
/// tables are dropped before returning.
pub fn find_route(
    grid: &HeightGrid,
    solver: Solver,
    policy: CostPolicy,
    from: Point,
    to: Point,
) -> Result<Route, PathError> {
    let start = grid.try_vertex(from)?;
    let goal = grid.try_vertex(to)?;
    let graph = build_graph(grid, &policy)?;

    let (vertices, cost) = match solver {
        Solver::Dijkstra => {
            let sp = graph.dijkstra(start)?;
            let cost = sp.distance(goal);
            (sp.path_to(goal), cost)
        }
        Solver::FloydWarshall => {
            let ap = graph.floyd_warshall();
            (ap.path(start, goal)?, ap.distance(start, goal))
        }
    };
    let (Some(vertices), Some(cost)) = (vertices, cost) else {
        return Err(PathError::Unreachable {
            from: start,
            to: goal,
        });
    };

    let cells = path_points(grid, &vertices);
    let marked = mark_path(grid, &cells);
    log::debug!(
        "{solver:?}/{policy:?} route {from} -> {to}: {} steps, cost {cost}",
        cells.len().saturating_sub(1)
    );
    Ok(Route {
        vertices,
        cells,
        cost,
        marked,
    })
}

/// Corner-to-corner route, `(0, 0)` to `(size - 1, size - 1)`, using the
/// solver's default policy.
pub fn corner_route(grid: &HeightGrid, solver: Solver) -> Result<Route, PathError> {
    find_route(
        grid,
        solver,
        solver.default_policy(),
        grid.first_corner(),
        grid.last_corner(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconstruct::path_cost;
    use ridgeway_core::GridError;

    #[test]
    fn zero_grid_dijkstra_costs_four() {
        let grid = HeightGrid::filled(3, 0).unwrap();
        let r = corner_route(&grid, Solver::Dijkstra).unwrap();
        assert_eq!(r.cost, 4);
        assert_eq!(r.steps(), 4);
        assert_eq!(r.cells.first(), Some(&Point::new(0, 0)));
        assert_eq!(r.cells.last(), Some(&Point::new(2, 2)));
        assert_eq!(r.marked.marked_count(), 5);
    }

    #[test]
    fn regenerative_route_can_be_negative() {
        let grid = HeightGrid::from_rows(&[[10, 0], [0, 0]]).unwrap();
        let r = corner_route(&grid, Solver::FloydWarshall).unwrap();
        assert_eq!(r.cost, -8);
        assert_eq!(r.cells.len(), 3);
        let g = build_graph(&grid, &CostPolicy::Regenerative).unwrap();
        assert_eq!(path_cost(&g, &r.vertices), Some(r.cost));
    }

    #[test]
    fn dijkstra_refuses_regenerative_policy() {
        let grid = HeightGrid::from_rows(&[[10, 0], [0, 0]]).unwrap();
        let err = find_route(
            &grid,
            Solver::Dijkstra,
            CostPolicy::Regenerative,
            Point::new(0, 0),
            Point::new(1, 1),
        )
        .unwrap_err();
        assert!(matches!(err, PathError::NegativeWeight { .. }));
    }

    #[test]
    fn single_cell_route_is_free() {
        let grid = HeightGrid::filled(1, 50).unwrap();
        for solver in [Solver::Dijkstra, Solver::FloydWarshall] {
            let r = corner_route(&grid, solver).unwrap();
            assert_eq!(r.cost, 0);
            assert_eq!(r.cells, vec![Point::new(0, 0)]);
            assert_eq!(r.steps(), 0);
        }
    }

    #[test]
    fn solvers_agree_under_ascent_policy() {
        let grid = HeightGrid::from_fn(6, |p| (p.x * p.x * 13 + p.y * 29) % 100).unwrap();
        let a = find_route(
            &grid,
            Solver::Dijkstra,
            CostPolicy::Ascent,
            grid.first_corner(),
            grid.last_corner(),
        )
        .unwrap();
        let b = find_route(
            &grid,
            Solver::FloydWarshall,
            CostPolicy::Ascent,
            grid.first_corner(),
            grid.last_corner(),
        )
        .unwrap();
        assert_eq!(a.cost, b.cost);
    }

    #[test]
    fn endpoints_outside_grid_are_rejected() {
        let grid = HeightGrid::filled(2, 0).unwrap();
        let err = find_route(
            &grid,
            Solver::Dijkstra,
            CostPolicy::Ascent,
            Point::new(0, 0),
            Point::new(2, 2),
        )
        .unwrap_err();
        assert_eq!(
            err,
            PathError::Grid(GridError::OutOfBounds {
                pos: Point::new(2, 2),
                size: 2
            })
        );
    }

    #[test]
    fn solver_labels() {
        assert_eq!(Solver::Dijkstra.to_string(), "Dijkstra's Shortest Path");
        assert_eq!(Solver::FloydWarshall.default_policy(), CostPolicy::Regenerative);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let grid = HeightGrid::from_rows(&[[3, 1], [4, 1]]).unwrap();
        let route = corner_route(&grid, Solver::Dijkstra).unwrap();
        let json = serde_json::to_string(&route).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(route, back);
    }
}
