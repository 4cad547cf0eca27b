use crate::error::PathError;
use crate::graph::Graph;

/// Distance sentinel for vertices the search never reached.
pub const UNREACHABLE: i64 = i64::MAX;

/// Predecessor / next-hop sentinel meaning "no vertex".
pub const NO_VERTEX: usize = usize::MAX;

/// Single-source result: a distance and a predecessor per vertex.
///
/// Unreached vertices keep [`UNREACHABLE`] and [`NO_VERTEX`]; use the
/// `Option` accessors rather than reading the raw tables as costs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPaths {
    pub(crate) source: usize,
    pub(crate) distance: Vec<i64>,
    pub(crate) previous: Vec<usize>,
}

impl ShortestPaths {
    /// The vertex the search started from.
    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Shortest cost from the source to `v`, or `None` if unreachable.
    pub fn distance(&self, v: usize) -> Option<i64> {
        self.distance.get(v).copied().filter(|&d| d != UNREACHABLE)
    }

    /// Vertex preceding `v` on its shortest path, or `None` for the source
    /// and for unreachable vertices.
    pub fn previous(&self, v: usize) -> Option<usize> {
        self.previous.get(v).copied().filter(|&p| p != NO_VERTEX)
    }

    /// Raw distance table, sentinels included.
    #[inline]
    pub fn distances(&self) -> &[i64] {
        &self.distance
    }

    /// Raw predecessor table, sentinels included.
    #[inline]
    pub fn predecessors(&self) -> &[usize] {
        &self.previous
    }
}

enum Nearest {
    Vertex(usize),
    OnlyUnreachable,
    AllVisited,
}

/// Scan for the unvisited vertex with the smallest distance. Indices are
/// scanned in increasing order and only a strictly smaller distance replaces
/// the current pick, so ties go to the lowest index.
fn nearest_unvisited(distance: &[i64], visited: &[bool]) -> Nearest {
    let mut best = None;
    let mut best_dist = UNREACHABLE;
    let mut any_unvisited = false;
    for (v, (&d, &seen)) in distance.iter().zip(visited).enumerate() {
        if seen {
            continue;
        }
        any_unvisited = true;
        if d < best_dist {
            best_dist = d;
            best = Some(v);
        }
    }
    match best {
        Some(v) => Nearest::Vertex(v),
        None if any_unvisited => Nearest::OnlyUnreachable,
        None => Nearest::AllVisited,
    }
}

impl Graph {
    /// Single-source shortest paths from `source` by vertex-set Dijkstra.
    ///
    /// Runs in `O(V² + E)`. Every edge must have a non-negative weight;
    /// a negative edge is rejected up front with
    /// [`PathError::NegativeWeight`].
    pub fn dijkstra(&self, source: usize) -> Result<ShortestPaths, PathError> {
        self.check_vertex(source)?;
        if let Some((from, e)) = self.find_negative() {
            return Err(PathError::NegativeWeight {
                from,
                to: e.to,
                weight: e.weight,
            });
        }

        let n = self.vertex_count();
        let mut distance = vec![UNREACHABLE; n];
        let mut previous = vec![NO_VERTEX; n];
        let mut visited = vec![false; n];
        let mut remaining = n;
        distance[source] = 0;

        while remaining > 0 {
            let near = match nearest_unvisited(&distance, &visited) {
                Nearest::Vertex(v) => v,
                // The rest of the graph is disconnected from the source.
                Nearest::OnlyUnreachable => break,
                Nearest::AllVisited => {
                    return Err(PathError::NoUnvisitedVertex { remaining });
                }
            };
            visited[near] = true;
            remaining -= 1;

            let base = distance[near];
            for e in self.edges(near) {
                if visited[e.to] {
                    continue;
                }
                let alt = base + i64::from(e.weight);
                if alt < distance[e.to] {
                    distance[e.to] = alt;
                    previous[e.to] = near;
                }
            }
        }

        if remaining > 0 {
            log::debug!("dijkstra from {source}: {remaining} of {n} vertices unreachable");
        }
        Ok(ShortestPaths {
            source,
            distance,
            previous,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{CostPolicy, build_graph};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use ridgeway_core::HeightGrid;

    fn random_graph(rng: &mut StdRng, n: usize, edges: usize) -> Graph {
        let mut g = Graph::new(n);
        for _ in 0..edges {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            g.add_edge(a, b, rng.random_range(0..20)).unwrap();
        }
        g
    }

    /// Cheapest simple path from `from` to `to` by exhaustive search.
    fn brute_force(g: &Graph, from: usize, to: usize) -> Option<i64> {
        fn walk(g: &Graph, at: usize, to: usize, cost: i64, seen: &mut Vec<bool>) -> Option<i64> {
            if at == to {
                return Some(cost);
            }
            seen[at] = true;
            let mut best: Option<i64> = None;
            for e in g.edges(at) {
                if seen[e.to] {
                    continue;
                }
                if let Some(c) = walk(g, e.to, to, cost + i64::from(e.weight), seen) {
                    best = Some(best.map_or(c, |b| b.min(c)));
                }
            }
            seen[at] = false;
            best
        }
        let mut seen = vec![false; g.vertex_count()];
        walk(g, from, to, 0, &mut seen)
    }

    #[test]
    fn zero_grid_corner_to_corner() {
        let grid = HeightGrid::filled(3, 0).unwrap();
        let g = build_graph(&grid, &CostPolicy::Ascent).unwrap();
        let sp = g.dijkstra(0).unwrap();
        assert_eq!(sp.source(), 0);
        assert_eq!(sp.distance(8), Some(4));
        assert_eq!(sp.distance(0), Some(0));
        assert_eq!(sp.previous(0), None);
        assert!(sp.previous(8).is_some());
    }

    #[test]
    fn matches_brute_force_on_small_graphs() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let g = random_graph(&mut rng, 6, 14);
            let sp = g.dijkstra(0).unwrap();
            for v in 0..6 {
                assert_eq!(sp.distance(v), brute_force(&g, 0, v), "vertex {v}\n{g}");
            }
        }
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(0, 2, 1).unwrap();
        g.add_edge(1, 3, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        let sp = g.dijkstra(0).unwrap();
        assert_eq!(sp.distance(3), Some(2));
        assert_eq!(sp.previous(3), Some(1));
    }

    #[test]
    fn unreachable_keeps_sentinels() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 2).unwrap();
        g.add_edge(2, 0, 1).unwrap();
        let sp = g.dijkstra(0).unwrap();
        assert_eq!(sp.distance(1), Some(2));
        assert_eq!(sp.distance(2), None);
        assert_eq!(sp.distances()[2], UNREACHABLE);
        assert_eq!(sp.predecessors()[2], NO_VERTEX);
    }

    #[test]
    fn rejects_negative_weights() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 2).unwrap();
        g.add_edge(1, 2, -1).unwrap();
        assert_eq!(
            g.dijkstra(0),
            Err(PathError::NegativeWeight {
                from: 1,
                to: 2,
                weight: -1
            })
        );
    }

    #[test]
    fn rejects_bad_source() {
        let g = Graph::new(2);
        assert!(matches!(
            g.dijkstra(2),
            Err(PathError::VertexOutOfRange { vertex: 2, .. })
        ));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let grid = HeightGrid::from_fn(5, |p| (p.x * 31 + p.y * 17) % 100).unwrap();
        let g = build_graph(&grid, &CostPolicy::Ascent).unwrap();
        assert_eq!(g.dijkstra(3).unwrap(), g.dijkstra(3).unwrap());
    }

    #[test]
    fn single_vertex() {
        let g = Graph::new(1);
        let sp = g.dijkstra(0).unwrap();
        assert_eq!(sp.distance(0), Some(0));
        assert_eq!(sp.previous(0), None);
    }
}
