//! Deterministic graph generators for benchmarks.

use pathviz_engine::config::GridPreset;
use pathviz_engine::graph::{presets, Graph, NodeId, Position};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Square grid with `side * side` nodes and derived weights.
pub fn grid_graph(side: usize) -> Graph {
    let preset = GridPreset {
        rows: side,
        cols: side,
        ..GridPreset::default()
    };
    presets::grid(&preset).expect("valid grid preset")
}

/// Nodes scattered on a square canvas; each links to `degree` random
/// earlier nodes, plus a chain that keeps the graph connected.
pub fn random_geometric_graph(node_count: usize, degree: usize, seed: u64) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut graph = Graph::new();
    let extent = (node_count as f64).sqrt() * 60.0;

    let ids: Vec<NodeId> = (0..node_count)
        .map(|_| graph.add_node(Position::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent))))
        .collect();

    for (i, &id) in ids.iter().enumerate().skip(1) {
        let _ = graph.add_edge(ids[i - 1], id, None);
        for _ in 0..degree.saturating_sub(1) {
            let other = ids[rng.gen_range(0..i)];
            // Duplicate pairs are simply skipped
            let _ = graph.add_edge(other, id, None);
        }
    }

    graph
}

/// First and last node ids.
pub fn corners(graph: &Graph) -> (NodeId, NodeId) {
    let ids = graph.node_ids();
    (ids[0], ids[ids.len() - 1])
}
