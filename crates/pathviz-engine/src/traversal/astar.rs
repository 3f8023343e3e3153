//! A* search with a Euclidean heuristic.
//!
//! f(n) = g(n) + h(n), where g is the accumulated edge weight and h the
//! straight-line distance to the end node. The open list is stable-sorted
//! by f before each extraction; closed nodes are never reopened.
//!
//! # Admissibility
//!
//! Derived weights are rounded Euclidean lengths, so h can overestimate a
//! derived edge by up to 0.5 and any manually lowered weight breaks the
//! bound entirely. A* is therefore optimal only on graphs whose weights
//! are at least the straight-line distance.
//!
//! Extracting the end node terminates the run without visiting it, so the
//! end never appears in the visitation order and is not counted.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::GraphResult;
use crate::graph::{Graph, NodeId, Position};

use super::result::{PathResult, SearchAlgorithm};
use super::run::{neighbors_of, weight_between, PathfindingRun, Progress, StepSink};
use super::state::TraversalState;

/// Straight-line distance between two node positions.
#[inline]
#[must_use]
pub fn euclidean_heuristic(from: &Position, to: &Position) -> f64 {
    from.distance(to)
}

pub(crate) struct AstarFrontier {
    open: Vec<NodeId>,
    in_open: HashSet<NodeId>,
    closed: HashSet<NodeId>,
    end: NodeId,
    goal: Position,
}

impl AstarFrontier {
    pub(crate) fn new(
        graph: &Graph,
        state: &mut TraversalState,
        start: NodeId,
        end: NodeId,
    ) -> GraphResult<Self> {
        let goal = graph.position_of(end)?;
        let origin = graph.position_of(start)?;

        state.set_distance(start, 0.0);
        state.set_f_score(start, euclidean_heuristic(&origin, &goal));

        Ok(Self {
            open: vec![start],
            in_open: HashSet::from([start]),
            closed: HashSet::new(),
            end,
            goal,
        })
    }

    pub(crate) fn expand(
        &mut self,
        graph: &Graph,
        state: &mut TraversalState,
        sink: &mut StepSink<'_>,
    ) -> Progress {
        if self.open.is_empty() {
            return Progress::Finished;
        }

        self.open.sort_by(|a, b| {
            state
                .f_score(*a)
                .partial_cmp(&state.f_score(*b))
                .unwrap_or(Ordering::Equal)
        });
        let current = self.open.remove(0);
        self.in_open.remove(&current);

        if current == self.end {
            return Progress::Finished;
        }

        self.closed.insert(current);
        let g = state.distance(current);
        let order = state.mark_visited(current);
        sink.visited(current, g, order);

        for &neighbor in neighbors_of(graph, current) {
            if self.closed.contains(&neighbor) {
                continue;
            }

            let tentative = g + weight_between(graph, current, neighbor);
            if self.in_open.insert(neighbor) {
                self.open.push(neighbor);
            } else if tentative >= state.distance(neighbor) {
                continue;
            }

            let h = graph
                .node(neighbor)
                .map_or(0.0, |n| euclidean_heuristic(&n.position, &self.goal));
            state.relax(neighbor, current, tentative);
            state.set_f_score(neighbor, tentative + h);
            sink.relaxed(current, neighbor, tentative);
        }

        Progress::Expanded
    }

    pub(crate) fn closed_count(&self) -> usize {
        self.closed.len()
    }
}

/// Run A* to completion.
///
/// # Errors
/// * `GraphError::UnknownNode` - start or end not in the graph
/// * `GraphError::InvalidQuery` - start == end
pub fn astar_search(graph: &Graph, start: NodeId, end: NodeId) -> GraphResult<PathResult> {
    Ok(PathfindingRun::new(graph, SearchAlgorithm::AStar, start, end)?.finish())
}
