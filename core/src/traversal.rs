use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use tracing::debug;

use crate::graph::Graph;

/// BFS bookkeeping: vertex → (distance from start, predecessor).
/// The start vertex is its own predecessor.
type Visited<'a, V> = HashMap<&'a V, (usize, &'a V)>;

/// Breadth-first search from `start` that stops the moment `target` is first
/// discovered. Returns the visited map when the target was reached.
///
/// State is keyed by vertex value, so the result does not depend on the
/// iteration order of the underlying map. `start == target` is handled by the
/// callers; a self-loop alone never "discovers" the start vertex again.
fn bfs_to_target<'a, V>(graph: &'a Graph<V>, start: &'a V, target: &V) -> Option<Visited<'a, V>>
where
    V: Eq + Hash + Clone,
{
    let mut visited: Visited<'a, V> = HashMap::new();
    let mut queue: VecDeque<(&'a V, usize)> = VecDeque::new();

    visited.insert(start, (0, start));
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for next in graph.neighbors(current) {
            if visited.contains_key(next) {
                continue;
            }
            visited.insert(next, (depth + 1, current));

            if next == target {
                debug!(visited = visited.len(), distance = depth + 1, "bfs reached target");
                return Some(visited);
            }

            queue.push_back((next, depth + 1));
        }
    }

    debug!(visited = visited.len(), "bfs exhausted without reaching target");
    None
}

/// True iff a path leads from `from` to `to`. False when either vertex is
/// absent; true for `from == to` whenever the vertex is present.
pub fn has_path<V>(graph: &Graph<V>, from: &V, to: &V) -> bool
where
    V: Eq + Hash + Clone,
{
    path_length(graph, from, to).is_some()
}

/// Length in edges of a shortest path from `from` to `to`.
///
/// Returns `Some(0)` when `from == to` and the vertex is present, and None if
/// no path exists or either vertex is absent.
pub fn path_length<V>(graph: &Graph<V>, from: &V, to: &V) -> Option<usize>
where
    V: Eq + Hash + Clone,
{
    let start = graph.vertex_ref(from)?;
    if !graph.contains(to) {
        return None;
    }
    if start == to {
        return Some(0);
    }

    let visited = bfs_to_target(graph, start, to)?;
    visited.get(to).map(|&(distance, _)| distance)
}

/// Shortest path from `from` to `to`, reconstructed from BFS predecessor
/// links. Linear in V + E.
///
/// Ties are broken deterministically: each vertex keeps the first predecessor
/// that discovered it, following adjacency insertion order.
pub fn shortest_path_bfs<V>(graph: &Graph<V>, from: &V, to: &V) -> Option<Vec<V>>
where
    V: Eq + Hash + Clone,
{
    let start = graph.vertex_ref(from)?;
    let target = graph.vertex_ref(to)?;
    if start == target {
        return Some(vec![start.clone()]);
    }

    let visited = bfs_to_target(graph, start, target)?;
    Some(reconstruct_path(&visited, start, target))
}

/// Walk predecessor links from `target` back to `start`.
fn reconstruct_path<V>(visited: &Visited<'_, V>, start: &V, target: &V) -> Vec<V>
where
    V: Eq + Hash + Clone,
{
    let mut path = vec![target.clone()];
    let mut current = target;

    while current != start {
        let &(_, parent) = &visited[current];
        path.push(parent.clone());
        current = parent;
    }

    path.reverse();
    path
}

/// Enumerate every simple path (no repeated vertex) from `start` to `target`
/// with an iterative backtracking DFS. Neighbors are explored in adjacency
/// insertion order, so paths come out in discovery order.
///
/// Exponential in the worst case: a dense or highly cyclic graph has
/// exponentially many simple paths and every one is materialized.
fn simple_paths<'a, V>(graph: &'a Graph<V>, start: &'a V, target: &V) -> Vec<Vec<&'a V>>
where
    V: Eq + Hash + Clone,
{
    if start == target {
        return vec![vec![start]];
    }

    let mut paths: Vec<Vec<&'a V>> = Vec::new();
    let mut path: Vec<&'a V> = vec![start];
    let mut on_path: HashSet<&'a V> = HashSet::from([start]);
    // Parallel to `path`: index of the next neighbor to try at each depth.
    let mut cursors: Vec<usize> = vec![0];

    while let Some(&cursor) = cursors.last() {
        let depth = cursors.len() - 1;
        let current = path[depth];

        let Some(next) = graph.neighbors(current).get(cursor) else {
            // Exhausted this vertex: backtrack.
            cursors.pop();
            if let Some(done) = path.pop() {
                on_path.remove(done);
            }
            continue;
        };
        cursors[depth] += 1;

        if on_path.contains(next) {
            continue;
        }
        if next == target {
            let mut found = path.clone();
            found.push(next);
            paths.push(found);
            continue;
        }

        path.push(next);
        on_path.insert(next);
        cursors.push(0);
    }

    debug!(paths = paths.len(), "enumerated simple paths");
    paths
}

/// Every simple path from `from` to `to`, endpoints included, in the order
/// the depth-first enumeration finds them. Empty if either vertex is absent
/// or no path exists. `from == to` yields the single path `[from]`.
pub fn all_simple_paths<V>(graph: &Graph<V>, from: &V, to: &V) -> Vec<Vec<V>>
where
    V: Eq + Hash + Clone,
{
    let (Some(start), Some(target)) = (graph.vertex_ref(from), graph.vertex_ref(to)) else {
        return Vec::new();
    };

    simple_paths(graph, start, target)
        .into_iter()
        .map(|p| p.into_iter().cloned().collect())
        .collect()
}

/// Shortest path from `from` to `to` chosen from the full set of simple
/// paths: the first minimum-length path in enumeration order.
///
/// Reachability is checked with BFS first so an unreachable target never
/// pays for the enumeration.
pub fn shortest_path_exhaustive<V>(graph: &Graph<V>, from: &V, to: &V) -> Option<Vec<V>>
where
    V: Eq + Hash + Clone,
{
    let start = graph.vertex_ref(from)?;
    let target = graph.vertex_ref(to)?;
    if start == target {
        return Some(vec![start.clone()]);
    }
    if !has_path(graph, start, target) {
        return None;
    }

    simple_paths(graph, start, target)
        .into_iter()
        .min_by_key(|p| p.len())
        .map(|p| p.into_iter().cloned().collect())
}
