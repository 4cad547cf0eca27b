use crate::dijkstra::NO_VERTEX;
use crate::graph::Graph;

/// Distance sentinel for pairs with no known path.
///
/// Far below `i64::MAX` so that two sentinels can be added without
/// overflow. Sums involving the sentinel are never compared.
pub const FW_INFINITY: i64 = i64::MAX / 4;

/// All-pairs result: `V×V` distance and next-hop tables, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllPairs {
    pub(crate) n: usize,
    pub(crate) distance: Vec<i64>,
    pub(crate) next: Vec<usize>,
}

impl AllPairs {
    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    #[inline]
    fn at(&self, from: usize, to: usize) -> Option<usize> {
        (from < self.n && to < self.n).then(|| from * self.n + to)
    }

    /// Shortest cost `from -> to`, or `None` if no path exists.
    pub fn distance(&self, from: usize, to: usize) -> Option<i64> {
        self.at(from, to)
            .map(|i| self.distance[i])
            .filter(|&d| d != FW_INFINITY)
    }

    /// First vertex after `from` on the shortest path to `to`.
    /// `next_hop(v, v)` is `v` itself.
    pub fn next_hop(&self, from: usize, to: usize) -> Option<usize> {
        self.at(from, to)
            .map(|i| self.next[i])
            .filter(|&v| v != NO_VERTEX)
    }

    /// Row `from` of the distance table, sentinels included.
    pub fn distance_row(&self, from: usize) -> Option<&[i64]> {
        let start = self.at(from, 0)?;
        self.distance.get(start..start + self.n)
    }

    /// Whether `v` lies on a negative cycle, i.e. its distance to itself
    /// fell below zero.
    pub fn on_negative_cycle(&self, v: usize) -> bool {
        self.at(v, v).is_some_and(|i| self.distance[i] < 0)
    }

    /// Whether any vertex lies on a negative cycle.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.n).any(|v| self.on_negative_cycle(v))
    }
}

impl Graph {
    /// All-pairs shortest paths by Floyd-Warshall.
    ///
    /// Negative edges are allowed. Negative cycles are not detected: if the
    /// graph has one, distances for pairs that can reach it are wrong, and
    /// sums saturate at `i64::MIN` instead of overflowing.
    /// Runs in `O(V³)` time and `O(V²)` memory.
    pub fn floyd_warshall(&self) -> AllPairs {
        let n = self.vertex_count();
        let mut distance = vec![FW_INFINITY; n * n];
        let mut next = vec![NO_VERTEX; n * n];

        for v in 0..n {
            distance[v * n + v] = 0;
            next[v * n + v] = v;
        }
        for (from, e) in self.all_edges() {
            let i = from * n + e.to;
            let w = i64::from(e.weight);
            if w < distance[i] {
                distance[i] = w;
                next[i] = e.to;
            }
        }

        for k in 0..n {
            for i in 0..n {
                let dik = distance[i * n + k];
                if dik == FW_INFINITY {
                    continue;
                }
                for j in 0..n {
                    let dkj = distance[k * n + j];
                    if dkj == FW_INFINITY {
                        continue;
                    }
                    let via = dik.saturating_add(dkj);
                    if via < distance[i * n + j] {
                        distance[i * n + j] = via;
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        let ap = AllPairs { n, distance, next };
        if ap.has_negative_cycle() {
            log::warn!("floyd-warshall: negative cycle present, distances are not shortest paths");
        }
        ap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{CostPolicy, build_graph};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ridgeway_core::HeightGrid;
    use ridgeway_dem::{DemConfig, DemGen};

    #[test]
    fn diagonal_is_zero() {
        let grid = HeightGrid::filled(2, 9).unwrap();
        let ap = build_graph(&grid, &CostPolicy::Regenerative)
            .unwrap()
            .floyd_warshall();
        for v in 0..4 {
            assert_eq!(ap.distance(v, v), Some(0));
            assert_eq!(ap.next_hop(v, v), Some(v));
        }
    }

    #[test]
    fn regenerative_descent_is_negative() {
        let grid = HeightGrid::from_rows(&[[10, 0], [0, 0]]).unwrap();
        let ap = build_graph(&grid, &CostPolicy::Regenerative)
            .unwrap()
            .floyd_warshall();
        // Drop 10 for -9, then a flat step for 1.
        assert_eq!(ap.distance(0, 3), Some(-8));
        assert_eq!(ap.distance(0, 1), Some(-9));
        let hop = ap.next_hop(0, 3).unwrap();
        assert!(hop == 1 || hop == 2);
    }

    #[test]
    fn negative_edge_never_beats_sentinel() {
        // 1 -> 2 is negative but 0 cannot reach 1.
        let mut g = Graph::new(3);
        g.add_edge(1, 2, -5).unwrap();
        let ap = g.floyd_warshall();
        assert_eq!(ap.distance(0, 2), None);
        assert_eq!(ap.next_hop(0, 2), None);
        assert_eq!(ap.distance(1, 2), Some(-5));
    }

    #[test]
    fn next_hop_takes_first_step_of_detour() {
        let mut g = Graph::new(4);
        g.add_edge(0, 3, 10).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(1, 2, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();
        let ap = g.floyd_warshall();
        assert_eq!(ap.distance(0, 3), Some(3));
        assert_eq!(ap.next_hop(0, 3), Some(1));
        assert_eq!(ap.next_hop(1, 3), Some(2));
    }

    #[test]
    fn agrees_with_dijkstra_on_non_negative_graphs() {
        let mut rng = StdRng::seed_from_u64(2024);
        let grid = DemGen::new(
            DemConfig {
                size: 5,
                roughness: 60,
            },
            &mut rng,
        )
        .generate()
        .unwrap();
        let g = build_graph(&grid, &CostPolicy::Ascent).unwrap();
        let ap = g.floyd_warshall();
        for i in 0..g.vertex_count() {
            let sp = g.dijkstra(i).unwrap();
            for j in 0..g.vertex_count() {
                assert_eq!(ap.distance(i, j), sp.distance(j), "pair ({i}, {j})");
            }
        }
    }

    #[test]
    fn out_of_range_queries_are_none() {
        let ap = Graph::new(2).floyd_warshall();
        assert_eq!(ap.vertex_count(), 2);
        assert_eq!(ap.distance(0, 5), None);
        assert_eq!(ap.next_hop(5, 0), None);
        assert_eq!(ap.distance_row(1), Some(&[FW_INFINITY, 0][..]));
        assert_eq!(ap.distance_row(2), None);
        assert!(!ap.on_negative_cycle(7));
    }

    #[test]
    fn dense_negative_cycles_saturate() {
        let n = 80;
        let mut g = Graph::new(n);
        for from in 0..n {
            for to in 0..n {
                if from != to {
                    g.add_edge(from, to, -1).unwrap();
                }
            }
        }
        let ap = g.floyd_warshall();
        assert!(ap.has_negative_cycle());
        assert!((0..n).all(|v| ap.on_negative_cycle(v)));
        assert!(ap.distance(0, 1).is_some_and(|d| d < 0));
    }
}
