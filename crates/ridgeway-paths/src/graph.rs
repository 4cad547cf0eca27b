use std::fmt;

use crate::error::PathError;

/// A directed, weighted edge stored in its source vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: usize,
    pub weight: i32,
}

/// Directed weighted graph over vertices `0..V`, stored as adjacency lists.
///
/// Each vertex owns its outgoing edges. Lists are kept in insertion order but
/// [`edges`](Graph::edges) yields them newest-first, so the most recently
/// added edge is the first one a search relaxes. Both engines depend on this
/// order only for tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adj: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Add a directed edge `from -> to`. Both endpoints must be in `0..V`.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i32) -> Result<(), PathError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adj[from].push(Edge { to, weight });
        Ok(())
    }

    /// Outgoing edges of `v`, newest first. Empty if `v` is out of range.
    pub fn edges(&self, v: usize) -> impl DoubleEndedIterator<Item = &Edge> + '_ {
        self.adj.get(v).map(|l| l.as_slice()).unwrap_or(&[]).iter().rev()
    }

    /// Every edge as `(from, edge)`, grouped by source vertex.
    pub fn all_edges(&self) -> impl Iterator<Item = (usize, &Edge)> + '_ {
        (0..self.adj.len()).flat_map(move |v| self.edges(v).map(move |e| (v, e)))
    }

    /// Smallest weight among the edges `from -> to`, if any.
    pub fn weight(&self, from: usize, to: usize) -> Option<i32> {
        self.edges(from)
            .filter(|e| e.to == to)
            .map(|e| e.weight)
            .min()
    }

    /// The first negative edge in adjacency order, if any.
    pub fn find_negative(&self) -> Option<(usize, Edge)> {
        self.all_edges()
            .find(|(_, e)| e.weight < 0)
            .map(|(v, e)| (v, *e))
    }

    /// Fail with [`PathError::VertexOutOfRange`] unless `v < V`.
    #[inline]
    pub fn check_vertex(&self, v: usize) -> Result<(), PathError> {
        if v < self.adj.len() {
            Ok(())
        } else {
            Err(PathError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.adj.len(),
            })
        }
    }
}

/// One adjacency list per line: `vertex: ---w-->to ---w-->to`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in 0..self.adj.len() {
            write!(f, "{v}:")?;
            for e in self.edges(v) {
                write!(f, " ---{}-->{}", e.weight, e.to)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
