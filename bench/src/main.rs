use std::collections::VecDeque;
use std::time::Instant;

use anyhow::{bail, Context};
use digraph_core::{Graph, PathStrategy};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Graphs larger than this never run the exhaustive path search.
const EXHAUSTIVE_MAX_NODES: u64 = 20;

/// Largest complete digraph the `blowup` mode enumerates.
const BLOWUP_MAX_CLIQUE: u64 = 9;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = match args.get(2) {
        Some(s) => s
            .parse()
            .with_context(|| format!("node_count must be a positive integer, got '{s}'"))?,
        None => 100_000,
    };
    let strategy: PathStrategy = match args.get(3) {
        Some(s) => s.parse()?,
        None => PathStrategy::Breadth,
    };

    if mode == "help" || mode == "--help" {
        println!("Usage: digraph-bench [mode] [node_count] [strategy]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  lsystem     Fractal branching tree (deep paths)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges");
        println!("  barbell     Two dense clusters connected by a thin bridge");
        println!("  dla         Diffusion-limited aggregation (organic branching)");
        println!("  blowup      Exhaustive path enumeration on growing complete digraphs");
        println!();
        println!("Strategies: breadth (default), exhaustive");
        println!("Default node_count: 100000");
        return Ok(());
    }

    if node_count < 2 {
        bail!("node_count must be at least 2, got {node_count}");
    }

    println!("digraph-bench");
    println!("=============");
    println!();

    let generators: Vec<(&str, fn(u64) -> Graph<u64>)> = match mode {
        "lsystem" => vec![("L-system tree", gen_lsystem)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "dla" => vec![("DLA (organic branching)", gen_dla)],
        "blowup" => {
            run_blowup();
            return Ok(());
        }
        "all" => vec![
            ("L-system tree", gen_lsystem as fn(u64) -> Graph<u64>),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
        ],
        other => bail!("unknown mode: {other}. Use --help for options."),
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count, strategy);
    }
    Ok(())
}

fn run_benchmark(
    name: &str,
    generator: fn(u64) -> Graph<u64>,
    node_count: u64,
    strategy: PathStrategy,
) {
    println!("--- {} ---", name);
    println!("Target: {} vertices", node_count);

    let t = Instant::now();
    let mut graph = generator(node_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s — {} vertices, {} edges",
        gen_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
    );

    // Reachability from vertex 0 to a spread of targets
    println!();
    println!("{:>10} {:>10} {:>10}", "target", "length", "time");
    println!("{:->10} {:->10} {:->10}", "", "", "");

    let last = graph.vertex_count() as u64 - 1;
    for target in [1, last / 100, last / 10, last / 2, last] {
        let t = Instant::now();
        let length = graph.path_length(&0, &target);
        let elapsed = t.elapsed();
        let shown = length.map_or_else(|| "none".to_string(), |l| l.to_string());
        println!("{:>10} {:>10} {:>8.1}ms", target, shown, elapsed.as_secs_f64() * 1000.0);
    }

    if strategy == PathStrategy::Exhaustive && node_count > EXHAUSTIVE_MAX_NODES {
        warn!(
            node_count,
            limit = EXHAUSTIVE_MAX_NODES,
            "exhaustive path search skipped; falling back to breadth"
        );
        graph.set_path_strategy(PathStrategy::Breadth);
    } else {
        graph.set_path_strategy(strategy);
    }

    // Path reconstruction: vertex 0 to last vertex
    println!();
    let t = Instant::now();
    let path = graph.get_path(&0, &last);
    let elapsed = t.elapsed();
    match path {
        Some(p) => println!(
            "Path 0 → {} ({}): {} hops in {:.1}ms",
            last,
            graph.config().path_strategy,
            p.len() - 1,
            elapsed.as_secs_f64() * 1000.0
        ),
        None => println!(
            "Path 0 → {} ({}): no path ({:.1}ms)",
            last,
            graph.config().path_strategy,
            elapsed.as_secs_f64() * 1000.0
        ),
    }
    println!();
}

/// Complete digraphs K3..K9: the number of simple paths between two vertices
/// grows factorially, which is what the exhaustive strategy pays for.
fn run_blowup() {
    println!("{:>6} {:>10} {:>12} {:>12}", "clique", "paths", "exhaustive", "breadth");
    println!("{:->6} {:->10} {:->12} {:->12}", "", "", "", "");

    for n in 3..=BLOWUP_MAX_CLIQUE {
        let graph = gen_complete(n);
        let target = n - 1;

        let t = Instant::now();
        let paths = digraph_core::all_simple_paths(&graph, &0, &target);
        let exhaustive = digraph_core::shortest_path_exhaustive(&graph, &0, &target);
        let exhaustive_ms = t.elapsed().as_secs_f64() * 1000.0;

        let t = Instant::now();
        let breadth = digraph_core::shortest_path_bfs(&graph, &0, &target);
        let breadth_ms = t.elapsed().as_secs_f64() * 1000.0;

        if exhaustive.as_ref().map(Vec::len) != breadth.as_ref().map(Vec::len) {
            warn!(clique = n, "strategies disagree on path length");
        }
        println!(
            "{:>6} {:>10} {:>10.2}ms {:>10.2}ms",
            n,
            paths.len(),
            exhaustive_ms,
            breadth_ms
        );
    }
    info!("blowup finished");
}

// ---------------------------------------------------------------------------
// Generators: O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Every ordered pair of distinct vertices is an edge.
fn gen_complete(n: u64) -> Graph<u64> {
    let mut graph = Graph::with_capacity(n as usize);
    for a in 0..n {
        for b in 0..n {
            if a != b {
                graph.add_edge(a, b);
            }
        }
    }
    graph
}

/// L-system fractal tree: each vertex spawns three children.
/// Deep paths (log depth) with exponential width.
fn gen_lsystem(node_count: u64) -> Graph<u64> {
    let mut graph = Graph::with_capacity(node_count as usize);
    let branching = 3u64;
    graph.add_vertex(0);

    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                graph.add_edge(parent, child);
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    graph
}

/// Small-world (Watts-Strogatz): ring lattice with K forward neighbors,
/// each edge rewired to a random vertex with probability p.
fn gen_small_world(node_count: u64) -> Graph<u64> {
    let k = 10u64;
    let p = 0.05f64;
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        graph.add_vertex(i);
    }

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                graph.add_edge(i, if rewired != i { rewired } else { neighbor });
            } else {
                graph.add_edge(i, neighbor);
            }
        }
    }

    graph
}

/// Erdos-Renyi: ~10 uniform random edges per vertex. Duplicate draws collapse.
fn gen_random(node_count: u64) -> Graph<u64> {
    let target_edges = node_count * 10;
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(54321);

    for i in 0..node_count {
        graph.add_vertex(i);
    }

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            graph.add_edge(from, to);
        }
    }

    graph
}

/// Barbell: two dense clusters joined by a chain of bridge vertices.
/// Every path from the first cluster to the second crosses the bridge.
fn gen_barbell(node_count: u64) -> Graph<u64> {
    let bridge_len = 10u64.min(node_count / 2);
    let cluster_size = ((node_count - bridge_len) / 2).max(1);
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(99999);

    for i in 0..cluster_size {
        graph.add_vertex(i);
        for _ in 0..20u64.min(cluster_size - 1) {
            let target = rng.next(cluster_size);
            if target != i {
                graph.add_edge(i, target);
            }
        }
    }

    // Bridge: chain from the last vertex of the first cluster
    let bridge_start = cluster_size;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        graph.add_edge(id - 1, id);
    }

    let b_start = bridge_start + bridge_len;
    graph.add_edge(b_start - 1, b_start);
    for i in 0..cluster_size {
        graph.add_vertex(b_start + i);
        for _ in 0..20u64.min(cluster_size - 1) {
            let target = rng.next(cluster_size);
            if target != i {
                graph.add_edge(b_start + i, b_start + target);
            }
        }
    }

    graph
}

/// DLA (Diffusion-Limited Aggregation): each new vertex attaches to a random
/// recent "surface" vertex, with an occasional second long-range edge.
/// Edges point from the root outward so vertex 0 reaches the growth.
fn gen_dla(node_count: u64) -> Graph<u64> {
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(77777);

    graph.add_vertex(0);

    let mut surface: VecDeque<u64> = VecDeque::with_capacity(10001);
    surface.push_back(0);
    let surface_max = 10000usize;

    for new_node in 1..node_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        graph.add_edge(attach_to, new_node);

        // 10% chance of a second connection (creates shortcuts)
        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node);
            if other != attach_to {
                graph.add_edge(other, new_node);
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    graph
}
