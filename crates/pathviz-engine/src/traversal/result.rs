//! Terminal result of a pathfinding run.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::graph::{EdgeKey, NodeId};

/// Pathfinding algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl SearchAlgorithm {
    /// All pathfinding algorithms in the editor's run order.
    pub const ALL: [SearchAlgorithm; 4] = [
        SearchAlgorithm::Dijkstra,
        SearchAlgorithm::AStar,
        SearchAlgorithm::Bfs,
        SearchAlgorithm::Dfs,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Bfs => "BFS",
            SearchAlgorithm::Dfs => "DFS",
            SearchAlgorithm::Dijkstra => "Dijkstra",
            SearchAlgorithm::AStar => "A*",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a pathfinding run.
#[derive(Debug, Clone)]
pub struct PathResult {
    pub algorithm: SearchAlgorithm,

    /// Nodes from start to end (empty if no path found).
    pub path: Vec<NodeId>,

    /// Edges lying on `path`, for highlighting.
    pub path_edges: Vec<EdgeKey>,

    /// Reported distance: hop count for BFS, path length - 1 for DFS,
    /// weighted distance for Dijkstra and A*. `f64::INFINITY` if unreachable.
    pub total_cost: f64,

    /// Sum of the weights of `path_edges` (`f64::INFINITY` if unreachable).
    pub path_weight: f64,

    /// Number of nodes the algorithm counts as visited.
    pub nodes_visited: usize,

    /// Whether `end` was reached.
    pub path_found: bool,

    /// Computation time spent inside the run (informational only).
    pub elapsed: Duration,
}

impl PathResult {
    /// Create result for an unreachable target.
    #[must_use]
    pub fn no_path(algorithm: SearchAlgorithm, nodes_visited: usize, elapsed: Duration) -> Self {
        Self {
            algorithm,
            path: Vec::new(),
            path_edges: Vec::new(),
            total_cost: f64::INFINITY,
            path_weight: f64::INFINITY,
            nodes_visited,
            path_found: false,
            elapsed,
        }
    }

    /// Cost, or `None` when unreachable.
    #[must_use]
    pub fn cost(&self) -> Option<f64> {
        self.path_found.then_some(self.total_cost)
    }

    /// Get path length (number of nodes).
    #[must_use]
    pub fn path_length(&self) -> usize {
        self.path.len()
    }

    /// Get number of edges in path.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Same outcome as `other`, ignoring timing.
    #[must_use]
    pub fn same_outcome(&self, other: &PathResult) -> bool {
        self.algorithm == other.algorithm
            && self.path == other.path
            && self.path_edges == other.path_edges
            && self.total_cost == other.total_cost
            && self.path_weight == other.path_weight
            && self.nodes_visited == other.nodes_visited
            && self.path_found == other.path_found
    }
}
