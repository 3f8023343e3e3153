//! Lazy, pull-based pathfinding run.
//!
//! A run owns its `TraversalState` and borrows the graph immutably. Each
//! call to `next()` advances the algorithm by at most one node expansion
//! and yields the steps it produced one at a time. Dropping the run at any
//! point is a clean cancellation.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::time::{Duration, Instant};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, NodeId};

use super::astar::AstarFrontier;
use super::bfs::BfsFrontier;
use super::dfs::DfsFrontier;
use super::dijkstra::DijkstraFrontier;
use super::path::{path_edges, path_weight, reconstruct_path};
use super::result::{PathResult, SearchAlgorithm};
use super::state::TraversalState;
use super::step::Step;

/// Outcome of one expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Progress {
    /// More expansions may follow.
    Expanded,
    /// Terminated: end reached or nothing left to explore.
    Finished,
}

/// Collects the steps of one expansion.
pub(crate) struct StepSink<'a> {
    queue: &'a mut VecDeque<Step>,
    emit_relaxations: bool,
}

impl StepSink<'_> {
    pub(crate) fn visited(&mut self, node: NodeId, distance: f64, order: usize) {
        log::trace!("visit node={} distance={} order={}", node, distance, order);
        self.queue.push_back(Step::NodeVisited {
            node,
            distance,
            order,
        });
    }

    pub(crate) fn relaxed(&mut self, source: NodeId, target: NodeId, distance: f64) {
        if self.emit_relaxations {
            self.queue.push_back(Step::EdgeRelaxed {
                source,
                target,
                distance,
            });
        }
    }
}

/// Per-algorithm search frontier.
enum Frontier {
    Bfs(BfsFrontier),
    Dfs(DfsFrontier),
    Dijkstra(DijkstraFrontier),
    AStar(AstarFrontier),
}

impl Frontier {
    fn new(
        algorithm: SearchAlgorithm,
        graph: &Graph,
        state: &mut TraversalState,
        start: NodeId,
        end: NodeId,
    ) -> GraphResult<Self> {
        Ok(match algorithm {
            SearchAlgorithm::Bfs => Frontier::Bfs(BfsFrontier::new(state, start, end)),
            SearchAlgorithm::Dfs => Frontier::Dfs(DfsFrontier::new(state, start, end)),
            SearchAlgorithm::Dijkstra => {
                Frontier::Dijkstra(DijkstraFrontier::new(graph, state, start, end))
            }
            SearchAlgorithm::AStar => {
                Frontier::AStar(AstarFrontier::new(graph, state, start, end)?)
            }
        })
    }

    fn expand(&mut self, graph: &Graph, state: &mut TraversalState, sink: &mut StepSink<'_>) -> Progress {
        match self {
            Frontier::Bfs(f) => f.expand(graph, state, sink),
            Frontier::Dfs(f) => f.expand(graph, state, sink),
            Frontier::Dijkstra(f) => f.expand(graph, state, sink),
            Frontier::AStar(f) => f.expand(graph, state, sink),
        }
    }

    fn nodes_visited(&self, state: &TraversalState) -> usize {
        match self {
            Frontier::Bfs(f) => f.discovered_count(),
            Frontier::Dfs(_) | Frontier::Dijkstra(_) => state.visited_count(),
            Frontier::AStar(f) => f.closed_count(),
        }
    }
}

/// A single pathfinding run over a graph snapshot.
///
/// # Example
///
/// ```
/// use pathviz_engine::graph::{Graph, Position};
/// use pathviz_engine::traversal::{PathfindingRun, SearchAlgorithm, Step};
///
/// let mut graph = Graph::new();
/// let a = graph.add_node(Position::new(0.0, 0.0));
/// let b = graph.add_node(Position::new(10.0, 0.0));
/// graph.add_edge(a, b, None)?;
///
/// let mut run = PathfindingRun::new(&graph, SearchAlgorithm::Dijkstra, a, b)?;
/// let first = run.next();
/// assert!(matches!(first, Some(Step::NodeVisited { node, .. }) if node == a));
///
/// let result = run.finish();
/// assert_eq!(result.path, vec![a, b]);
/// assert_eq!(result.cost(), Some(10.0));
/// # Ok::<(), pathviz_engine::GraphError>(())
/// ```
pub struct PathfindingRun<'g> {
    graph: &'g Graph,
    algorithm: SearchAlgorithm,
    start: NodeId,
    end: NodeId,
    state: TraversalState,
    frontier: Frontier,
    pending: VecDeque<Step>,
    emit_relaxations: bool,
    done: bool,
    elapsed: Duration,
}

impl<'g> PathfindingRun<'g> {
    /// Start a run with freshly reset traversal state.
    ///
    /// # Errors
    /// * `GraphError::UnknownNode` - start or end not in the graph
    /// * `GraphError::InvalidQuery` - start == end
    pub fn new(
        graph: &'g Graph,
        algorithm: SearchAlgorithm,
        start: NodeId,
        end: NodeId,
    ) -> GraphResult<Self> {
        for id in [start, end] {
            if !graph.contains_node(id) {
                return Err(GraphError::UnknownNode(id));
            }
        }
        if start == end {
            return Err(GraphError::InvalidQuery(format!(
                "start and end must differ (both {start})"
            )));
        }

        let mut state = TraversalState::new(graph);
        let frontier = Frontier::new(algorithm, graph, &mut state, start, end)?;

        log::debug!(
            "{} run started: start={}, end={}, nodes={}, edges={}",
            algorithm,
            start,
            end,
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Self {
            graph,
            algorithm,
            start,
            end,
            state,
            frontier,
            pending: VecDeque::new(),
            emit_relaxations: graph.config().emit_relaxations,
            done: false,
            elapsed: Duration::ZERO,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    /// Read-only view of the incremental traversal state.
    #[must_use]
    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    /// True once every step has been pulled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.done && self.pending.is_empty()
    }

    /// Drain the remaining steps and build the terminal result.
    #[must_use]
    pub fn finish(mut self) -> PathResult {
        self.by_ref().for_each(drop);
        self.build_result()
    }

    fn build_result(&self) -> PathResult {
        let nodes_visited = self.frontier.nodes_visited(&self.state);

        let Some(path) = reconstruct_path(&self.state, self.start, self.end) else {
            log::debug!(
                "{} complete: no path from {} to {}, {} nodes visited",
                self.algorithm,
                self.start,
                self.end,
                nodes_visited
            );
            return PathResult::no_path(self.algorithm, nodes_visited, self.elapsed);
        };

        let total_cost = match self.algorithm {
            SearchAlgorithm::Dfs => path.len().saturating_sub(1) as f64,
            _ => self.state.distance(self.end),
        };

        log::debug!(
            "{} complete: {} nodes on path, cost={}, {} nodes visited",
            self.algorithm,
            path.len(),
            total_cost,
            nodes_visited
        );

        PathResult {
            algorithm: self.algorithm,
            path_edges: path_edges(&path),
            path_weight: path_weight(self.graph, &path),
            path,
            total_cost,
            nodes_visited,
            path_found: true,
            elapsed: self.elapsed,
        }
    }
}

impl Iterator for PathfindingRun<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(step) = self.pending.pop_front() {
                return Some(step);
            }
            if self.done {
                return None;
            }

            let started = Instant::now();
            let mut sink = StepSink {
                queue: &mut self.pending,
                emit_relaxations: self.emit_relaxations,
            };
            let progress = self.frontier.expand(self.graph, &mut self.state, &mut sink);
            self.elapsed += started.elapsed();

            if progress == Progress::Finished {
                self.done = true;
            }
        }
    }
}

impl FusedIterator for PathfindingRun<'_> {}

/// Neighbors of `node`, empty for ids the graph does not know.
#[inline]
pub(crate) fn neighbors_of(graph: &Graph, node: NodeId) -> &[NodeId] {
    graph.neighbors(node).unwrap_or(&[])
}

/// Weight of the edge between two adjacent nodes.
#[inline]
pub(crate) fn weight_between(graph: &Graph, a: NodeId, b: NodeId) -> f64 {
    graph.edge_between(a, b).map_or(f64::INFINITY, |e| e.weight)
}
