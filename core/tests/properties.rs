use std::collections::HashSet;

use digraph_core::{
    all_simple_paths, shortest_path_bfs, shortest_path_exhaustive, Graph, GraphConfig,
    PathStrategy,
};
use proptest::prelude::*;

/// Small vertex alphabet keeps exhaustive enumeration cheap and makes
/// collisions (duplicate edges, cycles, self-loops) common.
fn arb_edges() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..7, 0u8..7), 0..18)
}

fn build(edges: &[(u8, u8)]) -> Graph<u8> {
    edges.iter().copied().collect()
}

fn is_valid_path(g: &Graph<u8>, path: &[u8]) -> bool {
    let distinct: HashSet<&u8> = path.iter().collect();
    distinct.len() == path.len() && path.windows(2).all(|w| g.has_edge(&w[0], &w[1]))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn add_edge_is_idempotent(edges in arb_edges(), a in 0u8..7, b in 0u8..7) {
        let mut g = build(&edges);
        g.add_edge(a, b);
        let (vertices, edge_count) = (g.vertex_count(), g.edge_count());
        prop_assert!(!g.add_edge(a, b));
        prop_assert!(!g.add_vertex(a));
        prop_assert_eq!(g.vertex_count(), vertices);
        prop_assert_eq!(g.edge_count(), edge_count);
    }

    #[test]
    fn edge_count_matches_distinct_pairs(edges in arb_edges()) {
        let g = build(&edges);
        let distinct: HashSet<(u8, u8)> = edges.iter().copied().collect();
        prop_assert_eq!(g.edge_count(), distinct.len());
        prop_assert_eq!(g.edges().len(), distinct.len());
        let total: usize = g.vertices().iter().map(|v| g.degree(v).unwrap()).sum();
        prop_assert_eq!(total, g.edge_count());
    }

    #[test]
    fn empty_iff_no_vertices(edges in arb_edges()) {
        let mut g = build(&edges);
        prop_assert_eq!(g.is_empty(), g.vertex_count() == 0);
        for v in g.vertices() {
            g.remove_vertex(&v);
        }
        prop_assert!(g.is_empty());
        prop_assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn remove_edge_round_trip(edges in arb_edges(), a in 0u8..7, b in 0u8..7) {
        let mut g = build(&edges);
        g.add_vertex(a);
        g.add_vertex(b);
        g.remove_edge(&a, &b);
        let before = g.edge_count();
        g.add_edge(a, b);
        g.remove_edge(&a, &b);
        prop_assert!(!g.has_edge(&a, &b));
        prop_assert_eq!(g.edge_count(), before);
        prop_assert!(g.contains(&a));
        prop_assert!(g.contains(&b));
    }

    #[test]
    fn remove_vertex_leaves_no_dangling_edges(edges in arb_edges(), victim in 0u8..7) {
        let mut g = build(&edges);
        g.remove_vertex(&victim);
        prop_assert!(!g.contains(&victim));
        for v in g.vertices() {
            prop_assert!(!g.adjacent_to(&v).contains(&victim));
            for n in g.adjacent_to(&v) {
                prop_assert!(g.contains(&n));
            }
        }
    }

    #[test]
    fn equality_ignores_insertion_order(edges in arb_edges()) {
        let forward = build(&edges);
        let mut reversed_edges = edges.clone();
        reversed_edges.reverse();
        let backward = build(&reversed_edges);
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(&backward, &forward);
        prop_assert_eq!(&forward, &forward.clone());
    }

    #[test]
    fn extra_edge_breaks_equality(edges in arb_edges(), a in 0u8..7, b in 0u8..7) {
        let g1 = build(&edges);
        let mut g2 = g1.clone();
        prop_assume!(!g1.has_edge(&a, &b));
        g2.add_edge(a, b);
        prop_assert_ne!(&g1, &g2);
    }

    #[test]
    fn every_present_vertex_reaches_itself(edges in arb_edges()) {
        let g = build(&edges);
        for v in g.vertices() {
            prop_assert!(g.has_path(&v, &v));
            prop_assert_eq!(g.path_length(&v, &v), Some(0));
            prop_assert_eq!(g.get_path(&v, &v), Some(vec![v]));
        }
    }

    #[test]
    fn path_strategies_agree_with_bfs_length(edges in arb_edges(), a in 0u8..7, b in 0u8..7) {
        let g = build(&edges);
        let len = g.path_length(&a, &b);
        prop_assert_eq!(g.has_path(&a, &b), len.is_some());

        let exhaustive = shortest_path_exhaustive(&g, &a, &b);
        let breadth = shortest_path_bfs(&g, &a, &b);
        prop_assert_eq!(exhaustive.as_ref().map(|p| p.len() - 1), len);
        prop_assert_eq!(breadth.as_ref().map(|p| p.len() - 1), len);

        for path in exhaustive.iter().chain(breadth.iter()) {
            prop_assert_eq!(path.first(), Some(&a));
            prop_assert_eq!(path.last(), Some(&b));
            prop_assert!(is_valid_path(&g, path));
        }
    }

    #[test]
    fn exhaustive_picks_a_minimum_of_all_simple_paths(edges in arb_edges(), a in 0u8..7, b in 0u8..7) {
        let g = build(&edges);
        let all = all_simple_paths(&g, &a, &b);
        let shortest = all.iter().map(Vec::len).min();
        prop_assert_eq!(g.get_path(&a, &b).map(|p| p.len()), shortest);
        for path in &all {
            prop_assert!(is_valid_path(&g, path));
        }
    }

    #[test]
    fn configured_strategy_drives_get_path(edges in arb_edges(), a in 0u8..7, b in 0u8..7) {
        let mut g: Graph<u8> =
            Graph::with_config(GraphConfig::new().path_strategy(PathStrategy::Breadth));
        g.load_edges(edges.iter().copied());
        prop_assert_eq!(g.get_path(&a, &b), shortest_path_bfs(&g, &a, &b));
    }

    #[test]
    fn snapshots_survive_mutation(edges in arb_edges(), v in 0u8..7) {
        let mut g = build(&edges);
        let adjacent = g.adjacent_to(&v);
        let path = g.get_path(&v, &0);
        g.remove_vertex(&v);
        g.remove_vertex(&0);
        let rebuilt = build(&edges);
        prop_assert_eq!(adjacent, rebuilt.adjacent_to(&v));
        prop_assert_eq!(path, rebuilt.get_path(&v, &0));
    }
}
