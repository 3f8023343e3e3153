//! Query-driven entry point over all algorithms.
//!
//! A driver hands the engine a graph and a [`Query`], gets back a lazy
//! [`AlgorithmRun`], pulls steps at its own pace and finally reads the
//! [`AlgorithmResult`]. The engine never renders or sleeps; pacing belongs
//! to the driver.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, NodeId};
use crate::mst::{MstResult, MstRun};
use crate::traversal::{PathResult, PathfindingRun, SearchAlgorithm, Step};

/// Every algorithm the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    Mst,
}

impl Algorithm {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Mst => "MST (Kruskal)",
            other => other.search().map_or("", |s| s.name()),
        }
    }

    /// The pathfinding algorithm, or `None` for MST.
    #[must_use]
    pub fn search(&self) -> Option<SearchAlgorithm> {
        match self {
            Algorithm::Bfs => Some(SearchAlgorithm::Bfs),
            Algorithm::Dfs => Some(SearchAlgorithm::Dfs),
            Algorithm::Dijkstra => Some(SearchAlgorithm::Dijkstra),
            Algorithm::AStar => Some(SearchAlgorithm::AStar),
            Algorithm::Mst => None,
        }
    }

    #[must_use]
    pub fn needs_endpoints(&self) -> bool {
        self.search().is_some()
    }
}

impl From<SearchAlgorithm> for Algorithm {
    fn from(algorithm: SearchAlgorithm) -> Self {
        match algorithm {
            SearchAlgorithm::Bfs => Algorithm::Bfs,
            SearchAlgorithm::Dfs => Algorithm::Dfs,
            SearchAlgorithm::Dijkstra => Algorithm::Dijkstra,
            SearchAlgorithm::AStar => Algorithm::AStar,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Algorithm plus optional endpoints.
///
/// Pathfinding needs both endpoints; MST ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub algorithm: Algorithm,
    #[serde(default)]
    pub start: Option<NodeId>,
    #[serde(default)]
    pub end: Option<NodeId>,
}

impl Query {
    #[must_use]
    pub fn path(algorithm: SearchAlgorithm, start: NodeId, end: NodeId) -> Self {
        Self {
            algorithm: algorithm.into(),
            start: Some(start),
            end: Some(end),
        }
    }

    #[must_use]
    pub fn mst() -> Self {
        Self {
            algorithm: Algorithm::Mst,
            start: None,
            end: None,
        }
    }

    fn endpoints(&self) -> GraphResult<(NodeId, NodeId)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(GraphError::InvalidQuery(format!(
                "{} needs both a start and an end node",
                self.algorithm
            ))),
        }
    }
}

/// A running algorithm of either family.
pub enum AlgorithmRun<'g> {
    Path(PathfindingRun<'g>),
    Mst(MstRun<'g>),
}

impl AlgorithmRun<'_> {
    /// Drain the remaining steps and build the terminal result.
    #[must_use]
    pub fn finish(self) -> AlgorithmResult {
        match self {
            AlgorithmRun::Path(run) => AlgorithmResult::Path(run.finish()),
            AlgorithmRun::Mst(run) => AlgorithmResult::Mst(run.finish()),
        }
    }
}

impl Iterator for AlgorithmRun<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        match self {
            AlgorithmRun::Path(run) => run.next(),
            AlgorithmRun::Mst(run) => run.next(),
        }
    }
}

/// Terminal result of an [`AlgorithmRun`].
#[derive(Debug, Clone)]
pub enum AlgorithmResult {
    Path(PathResult),
    Mst(MstResult),
}

impl AlgorithmResult {
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            AlgorithmResult::Path(r) => r.algorithm.into(),
            AlgorithmResult::Mst(_) => Algorithm::Mst,
        }
    }

    /// Path cost or spanning-tree weight; `None` when the end was unreachable.
    #[must_use]
    pub fn cost(&self) -> Option<f64> {
        match self {
            AlgorithmResult::Path(r) => r.cost(),
            AlgorithmResult::Mst(r) => Some(r.total_weight),
        }
    }

    #[must_use]
    pub fn nodes_visited(&self) -> usize {
        match self {
            AlgorithmResult::Path(r) => r.nodes_visited,
            AlgorithmResult::Mst(r) => r.nodes_visited,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self {
            AlgorithmResult::Path(r) => r.elapsed,
            AlgorithmResult::Mst(r) => r.elapsed,
        }
    }

    #[must_use]
    pub fn as_path(&self) -> Option<&PathResult> {
        match self {
            AlgorithmResult::Path(r) => Some(r),
            AlgorithmResult::Mst(_) => None,
        }
    }

    #[must_use]
    pub fn as_mst(&self) -> Option<&MstResult> {
        match self {
            AlgorithmResult::Mst(r) => Some(r),
            AlgorithmResult::Path(_) => None,
        }
    }
}

/// Start a run for `query` with fresh traversal state.
///
/// # Errors
/// * `GraphError::InvalidQuery` - pathfinding without both endpoints, or start == end
/// * `GraphError::UnknownNode` - endpoint not in the graph
/// * `GraphError::InsufficientNodes` - MST on fewer than 2 nodes
pub fn run<'g>(graph: &'g Graph, query: &Query) -> GraphResult<AlgorithmRun<'g>> {
    match query.algorithm.search() {
        Some(algorithm) => {
            let (start, end) = query.endpoints()?;
            Ok(AlgorithmRun::Path(PathfindingRun::new(graph, algorithm, start, end)?))
        }
        None => Ok(AlgorithmRun::Mst(MstRun::new(graph)?)),
    }
}

/// Run several pathfinding algorithms one after another on the same
/// endpoints, each from reset state. Results come back in `algorithms`
/// order; MST entries are skipped.
///
/// # Errors
/// * `GraphError::UnknownNode` - start or end not in the graph
/// * `GraphError::InvalidQuery` - start == end
pub fn find_paths(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    algorithms: &[Algorithm],
) -> GraphResult<Vec<PathResult>> {
    let results = algorithms
        .iter()
        .filter_map(Algorithm::search)
        .map(|algorithm| Ok(PathfindingRun::new(graph, algorithm, start, end)?.finish()))
        .collect::<GraphResult<Vec<_>>>()?;

    tracing::debug!(
        start,
        end,
        runs = results.len(),
        "compared pathfinding algorithms"
    );
    Ok(results)
}
