use std::fmt;
use std::str::FromStr;

use crate::error::GraphError;

/// How `Graph::get_path` reconstructs a shortest path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStrategy {
    /// Enumerate every simple path with a backtracking DFS and keep the first
    /// one of minimum length. Exponential on dense or cyclic graphs.
    #[default]
    Exhaustive,
    /// Walk BFS predecessor links back from the target. Linear in V + E.
    Breadth,
}

impl PathStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            PathStrategy::Exhaustive => "exhaustive",
            PathStrategy::Breadth => "breadth",
        }
    }
}

impl fmt::Display for PathStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts "exhaustive"/"dfs" and "breadth"/"bfs" (case-insensitive).
impl FromStr for PathStrategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exhaustive" | "dfs" => Ok(PathStrategy::Exhaustive),
            "breadth" | "bfs" => Ok(PathStrategy::Breadth),
            other => Err(GraphError::UnknownPathStrategy(other.to_string())),
        }
    }
}

/// Construction-time settings for a `Graph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    pub path_strategy: PathStrategy,
    /// Initial capacity hint for the vertex map.
    pub vertex_capacity: usize,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path_strategy(mut self, strategy: PathStrategy) -> Self {
        self.path_strategy = strategy;
        self
    }

    pub fn vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }
}
