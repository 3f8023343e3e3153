//! Brute-force oracles, independent of the engine's own algorithms.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};

use pathviz_engine::graph::{Edge, Graph, NodeId};

/// Cheapest weight and fewest hops over all simple paths from `start` to
/// `end`, or `None` if no path exists.
pub fn brute_force_path(graph: &Graph, start: NodeId, end: NodeId) -> Option<(f64, usize)> {
    fn walk(
        graph: &Graph,
        node: NodeId,
        end: NodeId,
        on_path: &mut HashSet<NodeId>,
        weight: f64,
        hops: usize,
        best: &mut Option<(f64, usize)>,
    ) {
        if node == end {
            *best = Some(match *best {
                Some((w, h)) => (w.min(weight), h.min(hops)),
                None => (weight, hops),
            });
            return;
        }
        for &next in graph.neighbors(node).expect("known node") {
            if on_path.insert(next) {
                let w = graph.edge_between(node, next).expect("adjacent").weight;
                walk(graph, next, end, on_path, weight + w, hops + 1, best);
                on_path.remove(&next);
            }
        }
    }

    let mut best = None;
    let mut on_path = HashSet::from([start]);
    walk(graph, start, end, &mut on_path, 0.0, 0, &mut best);
    best
}

/// True if `path` runs from `start` to `end` over existing edges without
/// repeating a node.
pub fn is_simple_path(graph: &Graph, path: &[NodeId], start: NodeId, end: NodeId) -> bool {
    let unique: HashSet<_> = path.iter().collect();
    path.first() == Some(&start)
        && path.last() == Some(&end)
        && unique.len() == path.len()
        && path.windows(2).all(|w| graph.edge_between(w[0], w[1]).is_some())
}

/// Size of the connected component containing `start`.
pub fn component_size(graph: &Graph, start: NodeId) -> usize {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for &next in graph.neighbors(node).expect("known node") {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.len()
}

/// Number of connected components.
pub fn component_count(graph: &Graph) -> usize {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut count = 0;
    for id in graph.node_ids() {
        if seen.contains(&id) {
            continue;
        }
        count += 1;
        let mut queue = VecDeque::from([id]);
        seen.insert(id);
        while let Some(node) = queue.pop_front() {
            for &next in graph.neighbors(node).expect("known node") {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    count
}

/// Edge count and weight of the lightest spanning forest, by enumerating
/// every edge subset. Only usable on small edge sets.
pub fn brute_force_spanning_forest(graph: &Graph) -> (usize, f64) {
    let edges: Vec<&Edge> = graph.edges().collect();
    assert!(edges.len() <= 16, "too many edges to enumerate");

    let index: HashMap<NodeId, usize> = graph
        .node_ids()
        .into_iter()
        .enumerate()
        .map(|(i, id)| (id, i))
        .collect();
    let target = graph.node_count() - component_count(graph);

    let mut best = f64::INFINITY;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != target {
            continue;
        }
        let mut parent: Vec<usize> = (0..graph.node_count()).collect();
        let mut weight = 0.0;
        let mut acyclic = true;
        for (bit, edge) in edges.iter().enumerate() {
            if mask & (1 << bit) == 0 {
                continue;
            }
            let ra = root(&mut parent, index[&edge.from]);
            let rb = root(&mut parent, index[&edge.to]);
            if ra == rb {
                acyclic = false;
                break;
            }
            parent[ra] = rb;
            weight += edge.weight;
        }
        if acyclic {
            best = best.min(weight);
        }
    }

    (target, if target == 0 { 0.0 } else { best })
}

fn root(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        i = parent[i];
    }
    i
}
