//! Per-run traversal state.
//!
//! Every run allocates a fresh `TraversalState` covering all nodes of the
//! graph, so nothing leaks from one run (finished or abandoned) into the
//! next. The graph itself is never mutated by a run.

use std::collections::HashMap;

use crate::graph::{Graph, NodeId};

/// Scratch values for one node during one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeState {
    /// Finalized / expanded by the algorithm.
    pub visited: bool,
    /// Tentative distance; `f64::INFINITY` while unreached.
    pub distance: f64,
    /// Predecessor on the best known path.
    pub previous: Option<NodeId>,
    /// A* only: distance + heuristic; `f64::INFINITY` otherwise.
    pub f_score: f64,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            visited: false,
            distance: f64::INFINITY,
            previous: None,
            f_score: f64::INFINITY,
        }
    }
}

impl NodeState {
    #[inline]
    #[must_use]
    pub fn is_reached(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Traversal state keyed by node id, plus the visitation order.
///
/// `order` holds every tracked id in graph insertion order so iteration is
/// deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct TraversalState {
    nodes: HashMap<NodeId, NodeState>,
    order: Vec<NodeId>,
    visit_order: Vec<NodeId>,
}

impl TraversalState {
    /// Reset state for every node of `graph`.
    #[must_use]
    pub fn new(graph: &Graph) -> Self {
        let order = graph.node_ids();
        Self {
            nodes: order.iter().map(|&id| (id, NodeState::default())).collect(),
            order,
            visit_order: Vec::with_capacity(graph.node_count()),
        }
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&NodeState> {
        self.nodes.get(&id)
    }

    /// Tentative distance (`f64::INFINITY` for unreached or unknown nodes).
    #[must_use]
    pub fn distance(&self, id: NodeId) -> f64 {
        self.nodes.get(&id).map_or(f64::INFINITY, |s| s.distance)
    }

    /// A* f-score (`f64::INFINITY` when unset).
    #[must_use]
    pub fn f_score(&self, id: NodeId) -> f64 {
        self.nodes.get(&id).map_or(f64::INFINITY, |s| s.f_score)
    }

    #[must_use]
    pub fn previous(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|s| s.previous)
    }

    #[must_use]
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(|s| s.visited)
    }

    /// Nodes in the order they were visited.
    #[must_use]
    pub fn visit_order(&self) -> &[NodeId] {
        &self.visit_order
    }

    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visit_order.len()
    }

    /// Number of nodes tracked (the graph's node count at run start).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Tracked nodes in graph insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeState)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id).map(|s| (*id, s)))
    }

    fn entry(&mut self, id: NodeId) -> &mut NodeState {
        let order = &mut self.order;
        self.nodes.entry(id).or_insert_with(|| {
            order.push(id);
            NodeState::default()
        })
    }

    /// Mark a node visited and return its 0-based visitation order.
    pub(crate) fn mark_visited(&mut self, id: NodeId) -> usize {
        self.entry(id).visited = true;
        self.visit_order.push(id);
        self.visit_order.len() - 1
    }

    pub(crate) fn set_distance(&mut self, id: NodeId, distance: f64) {
        self.entry(id).distance = distance;
    }

    /// Record a better path to `id` through `previous`.
    pub(crate) fn relax(&mut self, id: NodeId, previous: NodeId, distance: f64) {
        let entry = self.entry(id);
        entry.distance = distance;
        entry.previous = Some(previous);
    }

    pub(crate) fn set_f_score(&mut self, id: NodeId, f_score: f64) {
        self.entry(id).f_score = f_score;
    }
}
