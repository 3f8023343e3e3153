//! Depth-first search (iterative, explicit stack).
//!
//! LIFO stack seeded with the start node. Nodes are pushed once per
//! unvisited-neighbor sighting and skipped when popped if already visited
//! (lazy deletion). Each push overwrites the neighbor's predecessor, so the
//! predecessor of a visited node is whoever pushed the copy that was popped.
//! Popping the end node terminates the run.
//!
//! The reported cost is the reconstructed path length - 1, not the
//! traversal depth.

use crate::error::GraphResult;
use crate::graph::{Graph, NodeId};

use super::result::{PathResult, SearchAlgorithm};
use super::run::{neighbors_of, PathfindingRun, Progress, StepSink};
use super::state::TraversalState;

pub(crate) struct DfsFrontier {
    stack: Vec<NodeId>,
    end: NodeId,
}

impl DfsFrontier {
    pub(crate) fn new(state: &mut TraversalState, start: NodeId, end: NodeId) -> Self {
        state.set_distance(start, 0.0);
        Self {
            stack: vec![start],
            end,
        }
    }

    pub(crate) fn expand(
        &mut self,
        graph: &Graph,
        state: &mut TraversalState,
        sink: &mut StepSink<'_>,
    ) -> Progress {
        let current = loop {
            match self.stack.pop() {
                None => return Progress::Finished,
                Some(node) if state.is_visited(node) => continue,
                Some(node) => break node,
            }
        };

        let depth = state.distance(current);
        let order = state.mark_visited(current);
        sink.visited(current, depth, order);

        if current == self.end {
            return Progress::Finished;
        }

        for &neighbor in neighbors_of(graph, current) {
            if !state.is_visited(neighbor) {
                state.relax(neighbor, current, depth + 1.0);
                self.stack.push(neighbor);
                sink.relaxed(current, neighbor, depth + 1.0);
            }
        }

        Progress::Expanded
    }
}

/// Run DFS to completion.
///
/// # Errors
/// * `GraphError::UnknownNode` - start or end not in the graph
/// * `GraphError::InvalidQuery` - start == end
pub fn dfs_search(graph: &Graph, start: NodeId, end: NodeId) -> GraphResult<PathResult> {
    Ok(PathfindingRun::new(graph, SearchAlgorithm::Dfs, start, end)?.finish())
}
