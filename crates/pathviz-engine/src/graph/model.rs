//! Editable undirected graph with incremental adjacency.
//!
//! Nodes and edges are kept in insertion order; algorithm tie-breaking
//! depends on it. Every mutation is O(1) or O(degree) except `move_node`,
//! which is linear in the moved node's degree.

use std::collections::{BTreeMap, HashMap};

use crate::config::EngineConfig;
use crate::error::{GraphError, GraphResult};

use super::types::{default_label, is_valid_weight, Edge, EdgeKey, Node, NodeId, Position, WeightSource};

#[derive(Debug, Clone)]
struct NodeEntry {
    node: Node,
    seq: u64,
    /// Neighbors in edge-insertion order.
    adjacency: Vec<NodeId>,
}

#[derive(Debug, Clone)]
struct EdgeEntry {
    edge: Edge,
    seq: u64,
}

/// Weighted undirected graph.
///
/// # Example
///
/// ```
/// use pathviz_engine::graph::{Graph, Position};
///
/// let mut graph = Graph::new();
/// let a = graph.add_node(Position::new(0.0, 0.0));
/// let b = graph.add_node(Position::new(3.0, 4.0));
/// graph.add_edge(a, b, None)?;
///
/// assert_eq!(graph.edge_between(a, b).map(|e| e.weight), Some(5.0));
/// assert_eq!(graph.neighbors(a)?, &[b]);
/// # Ok::<(), pathviz_engine::GraphError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    config: EngineConfig,
    nodes: HashMap<NodeId, NodeEntry>,
    node_order: BTreeMap<u64, NodeId>,
    edges: HashMap<EdgeKey, EdgeEntry>,
    edge_order: BTreeMap<u64, EdgeKey>,
    next_node_id: NodeId,
    next_seq: u64,
}

impl Graph {
    /// Create an empty graph with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with a validated configuration.
    ///
    /// # Errors
    /// * `GraphError::InvalidConfig` - configuration failed validation
    pub fn with_config(config: EngineConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========== Nodes ==========

    /// Add a node with the default label for its id.
    pub fn add_node(&mut self, position: Position) -> NodeId {
        let id = self.next_node_id;
        self.insert_node(Node::new(id, position));
        id
    }

    /// Add a node with a custom label.
    pub fn add_node_with_label(&mut self, position: Position, label: impl Into<String>) -> NodeId {
        let id = self.next_node_id;
        self.insert_node(Node {
            id,
            position,
            label: label.into(),
        });
        id
    }

    /// Insert a node that already carries its id (snapshot import).
    ///
    /// The id counter moves past `node.id` so it is never handed out again;
    /// callers reject `NodeId::MAX` before inserting it.
    pub(crate) fn insert_node(&mut self, node: Node) {
        let id = node.id;
        let seq = self.bump_seq();
        self.next_node_id = self.next_node_id.max(id.saturating_add(1));
        self.node_order.insert(seq, id);
        self.nodes.insert(
            id,
            NodeEntry {
                node,
                seq,
                adjacency: Vec::new(),
            },
        );
        tracing::debug!(node = id, "node added");
    }

    /// Remove a node and every edge touching it.
    ///
    /// # Errors
    /// * `GraphError::UnknownNode` - node is not in the graph
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Node> {
        let entry = self.nodes.remove(&id).ok_or(GraphError::UnknownNode(id))?;
        self.node_order.remove(&entry.seq);

        for neighbor in &entry.adjacency {
            if let Some(edge_entry) = self.edges.remove(&EdgeKey::new(id, *neighbor)) {
                self.edge_order.remove(&edge_entry.seq);
            }
            if let Some(neighbor_entry) = self.nodes.get_mut(neighbor) {
                neighbor_entry.adjacency.retain(|n| *n != id);
            }
        }

        tracing::debug!(node = id, edges_removed = entry.adjacency.len(), "node removed");
        Ok(entry.node)
    }

    /// Move a node and recompute the derived weights of its edges.
    ///
    /// Manually weighted edges keep their weight.
    ///
    /// # Errors
    /// * `GraphError::UnknownNode` - node is not in the graph
    pub fn move_node(&mut self, id: NodeId, position: Position) -> GraphResult<()> {
        let entry = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
        entry.node.position = position;
        let adjacency = entry.adjacency.clone();

        for neighbor in adjacency {
            let neighbor_position = match self.nodes.get(&neighbor) {
                Some(n) => n.node.position,
                None => continue,
            };
            let weight = self.derive_weight(&position, &neighbor_position);
            if let Some(edge_entry) = self.edges.get_mut(&EdgeKey::new(id, neighbor)) {
                if edge_entry.edge.is_derived() {
                    edge_entry.edge.weight = weight;
                }
            }
        }
        Ok(())
    }

    /// Rename a node.
    ///
    /// # Errors
    /// * `GraphError::UnknownNode` - node is not in the graph
    pub fn set_label(&mut self, id: NodeId, label: impl Into<String>) -> GraphResult<()> {
        let entry = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
        entry.node.label = label.into();
        Ok(())
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id).map(|e| &e.node)
    }

    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Label of a node, if present.
    #[must_use]
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.label.as_str())
    }

    /// Label of a node, falling back to the default label for unknown ids.
    pub(crate) fn display_label(&self, id: NodeId) -> String {
        self.label(id).map_or_else(|| default_label(id), str::to_string)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.node_order
            .values()
            .filter_map(move |id| self.nodes.get(id).map(|e| &e.node))
    }

    /// Node ids in insertion order.
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.node_order.values().copied().collect()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Neighbors of a node in edge-insertion order.
    ///
    /// # Errors
    /// * `GraphError::UnknownNode` - node is not in the graph
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&[NodeId]> {
        self.nodes
            .get(&id)
            .map(|e| e.adjacency.as_slice())
            .ok_or(GraphError::UnknownNode(id))
    }

    /// Number of edges touching a node (0 for unknown nodes).
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.nodes.get(&id).map_or(0, |e| e.adjacency.len())
    }

    // ========== Edges ==========

    /// Connect two nodes.
    ///
    /// With `weight = None` the weight is the Euclidean distance between the
    /// endpoints rounded to the nearest integer and is kept up to date when
    /// either endpoint moves.
    ///
    /// # Errors
    /// * `GraphError::UnknownNode` - either endpoint is absent
    /// * `GraphError::SelfLoop` - `from == to`
    /// * `GraphError::DuplicateEdge` - the pair is already connected
    /// * `GraphError::InvalidWeight` - explicit weight not finite or not > 0
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Option<f64>) -> GraphResult<EdgeKey> {
        let from_position = self.position_of(from)?;
        let to_position = self.position_of(to)?;
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        let key = EdgeKey::new(from, to);
        if self.edges.contains_key(&key) {
            return Err(GraphError::DuplicateEdge(from, to));
        }

        let (weight, source) = match weight {
            Some(w) if is_valid_weight(w) => (w, WeightSource::Manual),
            Some(w) => return Err(GraphError::InvalidWeight(w)),
            None => (
                self.derive_weight(&from_position, &to_position),
                WeightSource::Derived,
            ),
        };

        let seq = self.bump_seq();
        self.edge_order.insert(seq, key);
        self.edges.insert(
            key,
            EdgeEntry {
                edge: Edge {
                    from,
                    to,
                    weight,
                    source,
                },
                seq,
            },
        );
        for (a, b) in [(from, to), (to, from)] {
            if let Some(entry) = self.nodes.get_mut(&a) {
                entry.adjacency.push(b);
            }
        }

        tracing::debug!(from, to, weight, "edge added");
        Ok(key)
    }

    /// Disconnect two nodes.
    ///
    /// # Errors
    /// * `GraphError::EdgeNotFound` - the pair is not connected
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<Edge> {
        let entry = self
            .edges
            .remove(&EdgeKey::new(a, b))
            .ok_or(GraphError::EdgeNotFound(a, b))?;
        self.edge_order.remove(&entry.seq);
        for (x, y) in [(a, b), (b, a)] {
            if let Some(node_entry) = self.nodes.get_mut(&x) {
                node_entry.adjacency.retain(|n| *n != y);
            }
        }
        tracing::debug!(a, b, "edge removed");
        Ok(entry.edge)
    }

    /// Override an edge weight. The edge becomes manually weighted.
    ///
    /// # Errors
    /// * `GraphError::InvalidWeight` - weight not finite or not > 0
    /// * `GraphError::EdgeNotFound` - the pair is not connected
    pub fn set_edge_weight(&mut self, a: NodeId, b: NodeId, weight: f64) -> GraphResult<()> {
        if !is_valid_weight(weight) {
            return Err(GraphError::InvalidWeight(weight));
        }
        let entry = self
            .edges
            .get_mut(&EdgeKey::new(a, b))
            .ok_or(GraphError::EdgeNotFound(a, b))?;
        entry.edge.weight = weight;
        entry.edge.source = WeightSource::Manual;
        Ok(())
    }

    /// Drop a manual override and return to the Euclidean weight.
    ///
    /// # Errors
    /// * `GraphError::EdgeNotFound` - the pair is not connected
    pub fn derive_edge_weight(&mut self, a: NodeId, b: NodeId) -> GraphResult<f64> {
        let key = EdgeKey::new(a, b);
        if !self.edges.contains_key(&key) {
            return Err(GraphError::EdgeNotFound(a, b));
        }
        let weight = self.derive_weight(&self.position_of(a)?, &self.position_of(b)?);
        if let Some(entry) = self.edges.get_mut(&key) {
            entry.edge.weight = weight;
            entry.edge.source = WeightSource::Derived;
        }
        Ok(weight)
    }

    /// Edge connecting `a` and `b`, in either orientation.
    #[must_use]
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.edges.get(&EdgeKey::new(a, b)).map(|e| &e.edge)
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edge_order
            .values()
            .filter_map(move |key| self.edges.get(key).map(|e| &e.edge))
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Remove everything and restart id assignment.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.node_order.clear();
        self.edges.clear();
        self.edge_order.clear();
        self.next_node_id = 0;
        tracing::debug!("graph cleared");
    }

    // ========== Helpers ==========

    /// Position of a node.
    ///
    /// # Errors
    /// * `GraphError::UnknownNode` - node is not in the graph
    pub fn position_of(&self, id: NodeId) -> GraphResult<Position> {
        self.node(id)
            .map(|n| n.position)
            .ok_or(GraphError::UnknownNode(id))
    }

    /// Weight the pair would get if it were derived, if both nodes exist.
    pub(crate) fn derived_weight_between(&self, a: NodeId, b: NodeId) -> Option<f64> {
        let pa = self.node(a)?.position;
        let pb = self.node(b)?.position;
        Some(self.derive_weight(&pa, &pb))
    }

    fn derive_weight(&self, a: &Position, b: &Position) -> f64 {
        a.distance(b).round().max(self.config.min_derived_weight)
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
