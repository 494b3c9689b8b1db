//! digraph-core: generic directed graph engine.
//!
//! A pure Rust library that keeps an insertion-ordered adjacency list per
//! vertex and answers adjacency, equality, and shortest path queries.
//! Reachability and path length come from breadth-first search; `get_path`
//! either enumerates every simple path and keeps a shortest one, or walks BFS
//! predecessor links, depending on the configured `PathStrategy`.
//!
//! The graph is single-threaded and unweighted. Every query that returns a
//! sequence hands back an independent snapshot.

mod config;
mod error;
mod graph;
mod traversal;

pub use config::{GraphConfig, PathStrategy};
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use traversal::{
    all_simple_paths, has_path, path_length, shortest_path_bfs, shortest_path_exhaustive,
};
