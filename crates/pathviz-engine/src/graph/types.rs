//! Graph model types.
//!
//! Nodes carry a 2-D position that feeds both Euclidean weight derivation
//! and the A* heuristic. Edges are undirected and identified by their
//! normalized endpoint pair.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node identifier.
///
/// Assigned from a monotonically increasing counter and never reused
/// within a session.
pub type NodeId = u64;

/// 2-D node position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Position,
    /// Display label; defaults to a letter sequence derived from the id.
    pub label: String,
}

impl Node {
    /// Create a node with the default label for its id.
    #[must_use]
    pub fn new(id: NodeId, position: Position) -> Self {
        Self {
            id,
            position,
            label: default_label(id),
        }
    }
}

/// Default node label: A..Z, then AA, AB, ... (bijective base 26).
#[must_use]
pub fn default_label(id: NodeId) -> String {
    let mut n = id;
    let mut letters = Vec::new();
    loop {
        letters.push(char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Key of an undirected edge: the endpoint pair with `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    low: NodeId,
    high: NodeId,
}

impl EdgeKey {
    /// Normalize an unordered pair.
    #[must_use]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    #[must_use]
    pub fn low(&self) -> NodeId {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> NodeId {
        self.high
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.low == node || self.high == node
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Where an edge weight came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightSource {
    /// Euclidean distance between the endpoints, recomputed on move.
    Derived,
    /// Supplied explicitly; never recomputed.
    Manual,
}

/// An undirected weighted edge.
///
/// `from`/`to` keep the orientation the edge was created with; the
/// algorithms treat it symmetrically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
    pub source: WeightSource,
}

impl Edge {
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.from, self.to)
    }

    /// The endpoint opposite to `node`, if `node` is an endpoint.
    #[must_use]
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.from {
            Some(self.to)
        } else if node == self.to {
            Some(self.from)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_derived(&self) -> bool {
        self.source == WeightSource::Derived
    }
}

/// Check an explicit weight: finite and strictly positive.
#[inline]
pub(crate) fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}
