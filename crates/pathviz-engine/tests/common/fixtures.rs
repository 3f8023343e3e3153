//! Deterministic graph fixtures.
//!
//! Random graphs come from `ChaCha8Rng::seed_from_u64`, so a failing seed
//! reproduces exactly. All weights are integers, which keeps every path
//! cost exact in `f64`.

#![allow(dead_code)]

use pathviz_engine::graph::{Graph, NodeId, Position};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// How random edge weights are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightMode {
    /// Rounded Euclidean length (no explicit weight).
    Derived,
    /// Arbitrary integer in 1..=20, unrelated to positions.
    Arbitrary,
    /// Integer no shorter than the straight-line distance, so the
    /// Euclidean heuristic never overestimates.
    Metric,
}

/// Unit-weight 4-cycle A-B-C-D-A.
pub fn unit_square() -> (Graph, [NodeId; 4]) {
    let mut graph = Graph::new();
    let a = graph.add_node(Position::new(0.0, 0.0));
    let b = graph.add_node(Position::new(10.0, 0.0));
    let c = graph.add_node(Position::new(10.0, 10.0));
    let d = graph.add_node(Position::new(0.0, 10.0));
    for (u, v) in [(a, b), (b, c), (c, d), (d, a)] {
        graph.add_edge(u, v, Some(1.0)).expect("square edge");
    }
    (graph, [a, b, c, d])
}

/// A-B with weight 5 plus an isolated C.
pub fn split_pair() -> (Graph, [NodeId; 3]) {
    let mut graph = Graph::new();
    let a = graph.add_node(Position::new(0.0, 0.0));
    let b = graph.add_node(Position::new(30.0, 40.0));
    let c = graph.add_node(Position::new(200.0, 200.0));
    graph.add_edge(a, b, Some(5.0)).expect("a-b");
    (graph, [a, b, c])
}

/// Random graph with 2..=`max_nodes` nodes and at most `max_edges` edges.
pub fn random_graph(seed: u64, max_nodes: usize, max_edges: usize, mode: WeightMode) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut graph = Graph::new();

    let node_count = rng.gen_range(2..=max_nodes);
    let ids: Vec<NodeId> = (0..node_count)
        .map(|_| {
            graph.add_node(Position::new(
                f64::from(rng.gen_range(0..=300u32)),
                f64::from(rng.gen_range(0..=300u32)),
            ))
        })
        .collect();

    let mut pairs: Vec<(NodeId, NodeId)> = ids
        .iter()
        .enumerate()
        .flat_map(|(i, &a)| ids[i + 1..].iter().map(move |&b| (a, b)))
        .collect();
    pairs.shuffle(&mut rng);

    let density = rng.gen_range(0.2..0.8);
    let mut added = 0;
    for (a, b) in pairs {
        if added == max_edges {
            break;
        }
        if !rng.gen_bool(density) {
            continue;
        }
        let (from, to) = if rng.gen_bool(0.5) { (a, b) } else { (b, a) };
        let weight = match mode {
            WeightMode::Derived => None,
            WeightMode::Arbitrary => Some(f64::from(rng.gen_range(1..=20u32))),
            WeightMode::Metric => {
                let straight = graph
                    .position_of(from)
                    .and_then(|p| graph.position_of(to).map(|q| p.distance(&q)))
                    .expect("endpoints exist");
                Some(straight.ceil().max(1.0) + f64::from(rng.gen_range(0..=5u32)))
            }
        };
        graph.add_edge(from, to, weight).expect("random edge");
        added += 1;
    }

    graph
}

/// All ordered pairs of distinct nodes.
pub fn endpoint_pairs(graph: &Graph) -> Vec<(NodeId, NodeId)> {
    let ids = graph.node_ids();
    ids.iter()
        .flat_map(|&s| ids.iter().filter(move |&&t| t != s).map(move |&t| (s, t)))
        .collect()
}
