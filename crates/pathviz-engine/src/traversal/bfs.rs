//! Breadth-first search.
//!
//! FIFO queue seeded with the start node; distance is the hop count. A
//! neighbor is discovered (predecessor and distance set) when first seen,
//! in edge-insertion order. Dequeuing the end node terminates the run.
//! The visited count is the number of discovered nodes.

use std::collections::{HashSet, VecDeque};

use crate::error::GraphResult;
use crate::graph::{Graph, NodeId};

use super::result::{PathResult, SearchAlgorithm};
use super::run::{neighbors_of, PathfindingRun, Progress, StepSink};
use super::state::TraversalState;

pub(crate) struct BfsFrontier {
    queue: VecDeque<NodeId>,
    discovered: HashSet<NodeId>,
    end: NodeId,
}

impl BfsFrontier {
    pub(crate) fn new(state: &mut TraversalState, start: NodeId, end: NodeId) -> Self {
        state.set_distance(start, 0.0);
        Self {
            queue: VecDeque::from([start]),
            discovered: HashSet::from([start]),
            end,
        }
    }

    pub(crate) fn expand(
        &mut self,
        graph: &Graph,
        state: &mut TraversalState,
        sink: &mut StepSink<'_>,
    ) -> Progress {
        let Some(current) = self.queue.pop_front() else {
            return Progress::Finished;
        };

        let depth = state.distance(current);
        let order = state.mark_visited(current);
        sink.visited(current, depth, order);

        if current == self.end {
            return Progress::Finished;
        }

        for &neighbor in neighbors_of(graph, current) {
            if self.discovered.insert(neighbor) {
                state.relax(neighbor, current, depth + 1.0);
                self.queue.push_back(neighbor);
                sink.relaxed(current, neighbor, depth + 1.0);
            }
        }

        Progress::Expanded
    }

    pub(crate) fn discovered_count(&self) -> usize {
        self.discovered.len()
    }
}

/// Run BFS to completion.
///
/// # Errors
/// * `GraphError::UnknownNode` - start or end not in the graph
/// * `GraphError::InvalidQuery` - start == end
pub fn bfs_search(graph: &Graph, start: NodeId, end: NodeId) -> GraphResult<PathResult> {
    Ok(PathfindingRun::new(graph, SearchAlgorithm::Bfs, start, end)?.finish())
}
