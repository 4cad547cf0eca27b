//! Turning predecessor and next-hop tables back into vertex sequences.

use ridgeway_core::{HeightGrid, MarkedGrid, Point};

use crate::dijkstra::{NO_VERTEX, ShortestPaths};
use crate::error::PathError;
use crate::floyd::AllPairs;
use crate::graph::Graph;

impl ShortestPaths {
    /// Vertices from the source to `dest`, both included.
    ///
    /// Walks the predecessor chain backward from `dest` and reverses it.
    /// Returns `None` if `dest` was not reached.
    pub fn path_to(&self, dest: usize) -> Option<Vec<usize>> {
        self.distance(dest)?;
        let mut path = Vec::new();
        let mut v = dest;
        while v != NO_VERTEX {
            path.push(v);
            v = self.previous[v];
        }
        path.reverse();
        Some(path)
    }
}

impl AllPairs {
    /// Vertices from `from` to `to`, both included, following
    /// `next[current][to]` forward.
    ///
    /// Returns `Ok(None)` when no path exists. A walk that enters a vertex on
    /// a negative cycle, or has not arrived after `V` hops, has no shortest
    /// path and is reported as [`PathError::CorruptNextHop`].
    pub fn path(&self, from: usize, to: usize) -> Result<Option<Vec<usize>>, PathError> {
        for v in [from, to] {
            if v >= self.n {
                return Err(PathError::VertexOutOfRange {
                    vertex: v,
                    vertex_count: self.n,
                });
            }
        }
        if self.distance(from, to).is_none() {
            return Ok(None);
        }

        let mut path = vec![from];
        let mut current = from;
        while current != to {
            if path.len() > self.n || self.on_negative_cycle(current) {
                return Err(PathError::CorruptNextHop { from, to });
            }
            current = self
                .next_hop(current, to)
                .ok_or(PathError::CorruptNextHop { from, to })?;
            path.push(current);
        }
        Ok(Some(path))
    }
}

/// Sum of edge weights along `path`, or `None` if some step is not an edge.
/// A single-vertex path costs 0.
pub fn path_cost(graph: &Graph, path: &[usize]) -> Option<i64> {
    path.windows(2)
        .map(|w| graph.weight(w[0], w[1]).map(i64::from))
        .sum()
}

/// Grid cells of a vertex path.
pub fn path_points(grid: &HeightGrid, path: &[usize]) -> Vec<Point> {
    path.iter().map(|&v| grid.point(v)).collect()
}

/// Copy of `grid` with every cell of `cells` set to the `OFF` sentinel.
pub fn mark_path(grid: &HeightGrid, cells: &[Point]) -> MarkedGrid {
    let mut marked = MarkedGrid::new(grid);
    for &p in cells {
        marked.mark(p);
    }
    marked
}
