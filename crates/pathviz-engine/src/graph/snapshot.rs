//! Persisted graph layout.
//!
//! ```json
//! {
//!   "nodes": [{ "id": 0, "x": 100.0, "y": 100.0, "label": "A" }],
//!   "edges": [{ "from": 0, "to": 1, "weight": 80.0 }]
//! }
//! ```
//!
//! `fromId`/`toId` are accepted as aliases of `from`/`to`. Importing keeps
//! node ids and labels and re-creates edges in file order, so adjacency
//! order and therefore every algorithm trace survive a round trip.

use std::collections::HashSet;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{GraphError, GraphResult};

use super::model::Graph;
use super::types::{Node, NodeId, Position};

/// Persisted node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Persisted edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(alias = "fromId")]
    pub from: NodeId,
    #[serde(alias = "toId")]
    pub to: NodeId,
    /// Missing or non-positive weights are derived from node positions.
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Node list plus edge list, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl Graph {
    /// Export nodes and edges in insertion order.
    #[must_use]
    pub fn to_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self
                .nodes()
                .map(|n| NodeRecord {
                    id: n.id,
                    x: n.position.x,
                    y: n.position.y,
                    label: n.label.clone(),
                })
                .collect(),
            edges: self
                .edges()
                .map(|e| EdgeRecord {
                    from: e.from,
                    to: e.to,
                    weight: Some(e.weight),
                })
                .collect(),
        }
    }

    /// Rebuild a graph from a snapshot with default configuration.
    ///
    /// # Errors
    /// * `GraphError::Deserialization` - duplicate node id, or `NodeId::MAX`
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> GraphResult<Self> {
        Self::from_snapshot_with_config(snapshot, EngineConfig::default())
    }

    /// Rebuild a graph from a snapshot.
    ///
    /// Edges with a missing endpoint, self-loops and duplicate pairs are
    /// skipped with a warning.
    ///
    /// # Errors
    /// * `GraphError::InvalidConfig` - configuration failed validation
    /// * `GraphError::Deserialization` - duplicate node id, or `NodeId::MAX`
    pub fn from_snapshot_with_config(
        snapshot: &GraphSnapshot,
        config: EngineConfig,
    ) -> GraphResult<Self> {
        let mut graph = Graph::with_config(config)?;

        let mut seen: HashSet<NodeId> = HashSet::with_capacity(snapshot.nodes.len());
        for record in &snapshot.nodes {
            if !seen.insert(record.id) {
                return Err(GraphError::Deserialization(format!(
                    "duplicate node id {} in snapshot",
                    record.id
                )));
            }
            // The id counter must stay above every imported id
            if record.id.checked_add(1).is_none() {
                return Err(GraphError::Deserialization(format!(
                    "node id {} leaves no room for new ids",
                    record.id
                )));
            }
            graph.insert_node(Node {
                id: record.id,
                position: Position::new(record.x, record.y),
                label: record.label.clone(),
            });
        }

        let mut skipped = 0usize;
        for record in &snapshot.edges {
            // A stored weight equal to the Euclidean one stays derived so it
            // keeps following node moves after import
            let weight = match record.weight.filter(|w| *w > 0.0) {
                Some(w) if graph.derived_weight_between(record.from, record.to) == Some(w) => None,
                other => other,
            };
            if let Err(err) = graph.add_edge(record.from, record.to, weight) {
                tracing::warn!(from = record.from, to = record.to, error = %err, "skipping snapshot edge");
                skipped += 1;
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            skipped,
            "graph loaded from snapshot"
        );
        Ok(graph)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    /// * `GraphError::Serialization` - serde_json failure
    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_snapshot())?)
    }

    /// Parse a graph from JSON.
    ///
    /// # Errors
    /// * `GraphError::Deserialization` - malformed JSON or duplicate node id
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(&snapshot)
    }

    /// Write JSON to any writer.
    ///
    /// # Errors
    /// * `GraphError::Serialization` - encoding failed
    /// * `GraphError::Io` - write or flush failed
    pub fn write_json<W: Write>(&self, mut writer: W) -> GraphResult<()> {
        serde_json::to_writer_pretty(&mut writer, &self.to_snapshot())?;
        writer.flush()?;
        Ok(())
    }

    /// Read JSON from any reader.
    ///
    /// # Errors
    /// * `GraphError::Deserialization` - malformed JSON or duplicate node id
    /// * `GraphError::Io` - read failed
    pub fn read_json<R: Read>(reader: R) -> GraphResult<Self> {
        let snapshot: GraphSnapshot = serde_json::from_reader(reader)?;
        Self::from_snapshot(&snapshot)
    }
}
