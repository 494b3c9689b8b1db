use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use tracing::trace;

use crate::config::{GraphConfig, PathStrategy};
use crate::error::{GraphError, Result};
use crate::traversal;

/// In-memory directed graph over vertices of type `V`.
///
/// Each vertex maps to its out-neighbors in the order the edges were first
/// added. Every neighbor is itself a key of the map, and no adjacency list
/// holds the same neighbor twice. A vertex without outgoing edges keeps an
/// empty list, which is distinct from the vertex being absent.
///
/// Not synchronized: callers sharing a graph across threads must serialize
/// mutation themselves.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: HashMap<V, Vec<V>>,
    config: GraphConfig,
}

impl<V> Graph<V> {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Pre-allocate for a known number of vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self::with_config(GraphConfig::default().vertex_capacity(vertex_count))
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            adjacency: HashMap::with_capacity(config.vertex_capacity),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Switch the strategy used by `get_path` on an existing graph.
    pub fn set_path_strategy(&mut self, strategy: PathStrategy) {
        self.config.path_strategy = strategy;
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|v| v.len()).sum()
    }

    /// True iff the graph has no vertices (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Insert `vertex` with no outgoing edges. Returns false if it was
    /// already present, in which case nothing changes.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        trace!(vertices = self.adjacency.len(), "added vertex");
        true
    }

    /// Add a directed edge, inserting either endpoint that is missing.
    /// Returns false if the edge already existed.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        if !self.adjacency.contains_key(&to) {
            self.adjacency.insert(to.clone(), Vec::new());
        }
        let neighbors = self.adjacency.entry(from).or_default();
        if neighbors.contains(&to) {
            return false;
        }
        neighbors.push(to);
        trace!(degree = neighbors.len(), "added edge");
        true
    }

    /// Bulk load from an iterator of (from, to) pairs. Equivalent to calling
    /// `add_edge` for each pair in order.
    pub fn load_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }

    /// Remove `vertex`, its outgoing edges, and every edge pointing at it.
    /// Returns false if the vertex was not present.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adjacency.remove(vertex).is_none() {
            return false;
        }
        let mut incoming = 0usize;
        for neighbors in self.adjacency.values_mut() {
            if let Some(pos) = neighbors.iter().position(|n| n == vertex) {
                neighbors.remove(pos);
                incoming += 1;
            }
        }
        trace!(incoming, vertices = self.adjacency.len(), "removed vertex");
        true
    }

    /// Remove the edge (from, to). Returns false if either vertex or the edge
    /// is absent.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        if !self.adjacency.contains_key(to) {
            return false;
        }
        let Some(neighbors) = self.adjacency.get_mut(from) else {
            return false;
        };
        match neighbors.iter().position(|n| n == to) {
            Some(pos) => {
                neighbors.remove(pos);
                trace!(degree = neighbors.len(), "removed edge");
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// True iff `to` is an out-neighbor of `from`. A missing `from` has no
    /// edges.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }

    /// Number of outgoing edges from `vertex`.
    pub fn degree(&self, vertex: &V) -> Result<usize>
    where
        V: fmt::Debug,
    {
        self.adjacency
            .get(vertex)
            .map(Vec::len)
            .ok_or_else(|| GraphError::NoSuchVertex {
                vertex: format!("{vertex:?}"),
            })
    }

    /// Snapshot of all vertices, in no particular order.
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Borrowed view of the out-neighbors of `vertex`, in insertion order.
    /// Empty if the vertex is absent.
    pub fn neighbors(&self, vertex: &V) -> &[V] {
        self.adjacency
            .get(vertex)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Snapshot of the out-neighbors of `vertex`, in insertion order.
    /// Empty if the vertex is absent.
    pub fn adjacent_to(&self, vertex: &V) -> Vec<V> {
        self.neighbors(vertex).to_vec()
    }

    /// Snapshot of every directed edge as (from, to).
    pub fn edges(&self) -> Vec<(V, V)> {
        self.adjacency
            .iter()
            .flat_map(|(from, neighbors)| {
                neighbors.iter().map(move |to| (from.clone(), to.clone()))
            })
            .collect()
    }

    /// The graph's own copy of `vertex`, so search state can borrow from the
    /// graph rather than from the caller's argument.
    pub(crate) fn vertex_ref(&self, vertex: &V) -> Option<&V> {
        self.adjacency.get_key_value(vertex).map(|(k, _)| k)
    }

    /// True iff `from` reaches `to`. Every present vertex reaches itself.
    pub fn has_path(&self, from: &V, to: &V) -> bool {
        traversal::has_path(self, from, to)
    }

    /// Number of edges on a shortest path from `from` to `to`, or None when
    /// no path exists or either vertex is absent.
    pub fn path_length(&self, from: &V, to: &V) -> Option<usize> {
        traversal::path_length(self, from, to)
    }

    /// Vertices along a shortest path from `from` to `to`, both endpoints
    /// included. Uses the configured `PathStrategy`; among equally short
    /// paths, which one is returned is unspecified.
    pub fn get_path(&self, from: &V, to: &V) -> Option<Vec<V>> {
        match self.config.path_strategy {
            PathStrategy::Exhaustive => traversal::shortest_path_exhaustive(self, from, to),
            PathStrategy::Breadth => traversal::shortest_path_bfs(self, from, to),
        }
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Same vertex set, and the same out-neighbor set for every vertex.
/// Adjacency order and configuration are ignored.
impl<V: Eq + Hash> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        if self.adjacency.len() != other.adjacency.len() {
            return false;
        }
        self.adjacency.iter().all(|(vertex, neighbors)| {
            other.adjacency.get(vertex).is_some_and(|theirs| {
                neighbors.len() == theirs.len()
                    && neighbors.iter().collect::<HashSet<_>>()
                        == theirs.iter().collect::<HashSet<_>>()
            })
        })
    }
}

impl<V: Eq + Hash> Eq for Graph<V> {}

/// One line per vertex: `A: B, C` followed by a newline. A vertex with no
/// neighbors renders as `A:`. Vertex order follows the map.
impl<V: fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in &self.adjacency {
            write!(f, "{vertex}:")?;
            for (i, neighbor) in neighbors.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{neighbor}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<V: Eq + Hash + Clone> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.load_edges(iter);
        graph
    }
}

impl<V: Eq + Hash + Clone> Extend<(V, V)> for Graph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        self.load_edges(iter);
    }
}
