//! Visitation events emitted by algorithm runs.

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;

/// One immutable event of a run's step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// A node was visited (dequeued, popped or finalized).
    NodeVisited {
        node: NodeId,
        /// Distance of the node at the time of the visit.
        distance: f64,
        /// 0-based position in the visitation order.
        order: usize,
    },
    /// A neighbor's tentative distance / predecessor was updated.
    EdgeRelaxed {
        source: NodeId,
        target: NodeId,
        distance: f64,
    },
    /// Kruskal accepted an edge into the spanning tree.
    EdgeAccepted {
        source: NodeId,
        target: NodeId,
        weight: f64,
        /// Running total of accepted weights including this edge.
        total: f64,
    },
}

/// Discriminant of [`Step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    NodeVisited,
    EdgeRelaxed,
    EdgeAccepted,
}

impl Step {
    #[must_use]
    pub fn kind(&self) -> StepKind {
        match self {
            Step::NodeVisited { .. } => StepKind::NodeVisited,
            Step::EdgeRelaxed { .. } => StepKind::EdgeRelaxed,
            Step::EdgeAccepted { .. } => StepKind::EdgeAccepted,
        }
    }

    /// Node of a `NodeVisited` step.
    #[must_use]
    pub fn visited_node(&self) -> Option<NodeId> {
        match self {
            Step::NodeVisited { node, .. } => Some(*node),
            _ => None,
        }
    }
}
