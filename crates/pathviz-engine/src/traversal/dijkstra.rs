//! Dijkstra's algorithm with a rescanned unvisited list.
//!
//! The unvisited list starts in node insertion order and is stable-sorted
//! by tentative distance before every extraction, so equal distances keep
//! their relative order from the previous round. Finalizing an unreached
//! node or the end node terminates the run.

use std::cmp::Ordering;

use crate::error::GraphResult;
use crate::graph::{Graph, NodeId};

use super::result::{PathResult, SearchAlgorithm};
use super::run::{neighbors_of, weight_between, PathfindingRun, Progress, StepSink};
use super::state::TraversalState;

pub(crate) struct DijkstraFrontier {
    unvisited: Vec<NodeId>,
    end: NodeId,
}

impl DijkstraFrontier {
    pub(crate) fn new(graph: &Graph, state: &mut TraversalState, start: NodeId, end: NodeId) -> Self {
        state.set_distance(start, 0.0);
        Self {
            unvisited: graph.node_ids(),
            end,
        }
    }

    pub(crate) fn expand(
        &mut self,
        graph: &Graph,
        state: &mut TraversalState,
        sink: &mut StepSink<'_>,
    ) -> Progress {
        if self.unvisited.is_empty() {
            return Progress::Finished;
        }

        // Vec::sort_by is stable
        self.unvisited.sort_by(|a, b| {
            state
                .distance(*a)
                .partial_cmp(&state.distance(*b))
                .unwrap_or(Ordering::Equal)
        });
        let current = self.unvisited.remove(0);
        let distance = state.distance(current);

        if distance == f64::INFINITY {
            return Progress::Finished;
        }

        let order = state.mark_visited(current);
        sink.visited(current, distance, order);

        if current == self.end {
            return Progress::Finished;
        }

        for &neighbor in neighbors_of(graph, current) {
            if state.is_visited(neighbor) {
                continue;
            }
            let candidate = distance + weight_between(graph, current, neighbor);
            if candidate < state.distance(neighbor) {
                state.relax(neighbor, current, candidate);
                sink.relaxed(current, neighbor, candidate);
            }
        }

        Progress::Expanded
    }
}

/// Run Dijkstra to completion.
///
/// # Errors
/// * `GraphError::UnknownNode` - start or end not in the graph
/// * `GraphError::InvalidQuery` - start == end
pub fn dijkstra_search(graph: &Graph, start: NodeId, end: NodeId) -> GraphResult<PathResult> {
    Ok(PathfindingRun::new(graph, SearchAlgorithm::Dijkstra, start, end)?.finish())
}
