//! Kruskal's minimum spanning tree.
//!
//! Edges are stable-sorted by weight, so equal weights are tried in edge
//! insertion order. Each accepted edge yields one `EdgeAccepted` step;
//! rejected edges produce nothing. The run stops once `node_count - 1`
//! edges are accepted, or when the edges run out on a disconnected graph
//! (the result is then a spanning forest).

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Edge, EdgeKey, Graph};
use crate::traversal::Step;

use super::union_find::DisjointSet;

/// Terminal result of a Kruskal run.
#[derive(Debug, Clone, Serialize)]
pub struct MstResult {
    /// Accepted edges in acceptance order.
    pub edges: Vec<Edge>,
    /// Sum of accepted weights.
    pub total_weight: f64,
    /// Every node counts as visited.
    pub nodes_visited: usize,
    /// Computation time spent inside the run (informational only).
    pub elapsed: Duration,
    labels: Vec<String>,
}

impl MstResult {
    /// Accepted edges as "label-label" strings, e.g. `"A-B"`.
    #[must_use]
    pub fn edge_labels(&self) -> &[String] {
        &self.labels
    }

    /// Keys of the accepted edges, for highlighting.
    #[must_use]
    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges.iter().map(Edge::key).collect()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the accepted edges connect every node.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() + 1 == self.nodes_visited
    }

    /// Same outcome as `other`, ignoring timing.
    #[must_use]
    pub fn same_outcome(&self, other: &MstResult) -> bool {
        self.edges == other.edges
            && self.total_weight == other.total_weight
            && self.nodes_visited == other.nodes_visited
            && self.labels == other.labels
    }
}

/// A single Kruskal run over a graph snapshot.
///
/// ```
/// use pathviz_engine::graph::{Graph, Position};
/// use pathviz_engine::mst::MstRun;
///
/// let mut graph = Graph::new();
/// let a = graph.add_node(Position::new(0.0, 0.0));
/// let b = graph.add_node(Position::new(3.0, 4.0));
/// graph.add_edge(a, b, None)?;
///
/// let result = MstRun::new(&graph)?.finish();
/// assert_eq!(result.edge_labels(), ["A-B"]);
/// assert_eq!(result.total_weight, 5.0);
/// # Ok::<(), pathviz_engine::GraphError>(())
/// ```
pub struct MstRun<'g> {
    graph: &'g Graph,
    candidates: Vec<&'g Edge>,
    cursor: usize,
    forest: DisjointSet,
    target: usize,
    accepted: Vec<Edge>,
    labels: Vec<String>,
    total_weight: f64,
    elapsed: Duration,
}

impl<'g> MstRun<'g> {
    /// Sort the edges and reset the disjoint sets.
    ///
    /// # Errors
    /// * `GraphError::InsufficientNodes` - fewer than 2 nodes
    pub fn new(graph: &'g Graph) -> GraphResult<Self> {
        let node_count = graph.node_count();
        if node_count < 2 {
            return Err(GraphError::InsufficientNodes {
                required: 2,
                actual: node_count,
            });
        }

        let started = Instant::now();
        let mut candidates: Vec<&Edge> = graph.edges().collect();
        candidates.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));
        let forest = DisjointSet::from_ids(graph.node_ids());

        log::debug!(
            "Kruskal run started: nodes={}, edges={}",
            node_count,
            candidates.len()
        );

        Ok(Self {
            graph,
            candidates,
            cursor: 0,
            forest,
            target: node_count - 1,
            accepted: Vec::with_capacity(node_count - 1),
            labels: Vec::with_capacity(node_count - 1),
            total_weight: 0.0,
            elapsed: started.elapsed(),
        })
    }

    /// Edges accepted so far.
    #[must_use]
    pub fn accepted(&self) -> &[Edge] {
        &self.accepted
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.accepted.len() >= self.target || self.cursor >= self.candidates.len()
    }

    /// Drain the remaining steps and build the terminal result.
    #[must_use]
    pub fn finish(mut self) -> MstResult {
        self.by_ref().for_each(drop);

        log::debug!(
            "Kruskal complete: {} edges accepted, total weight={}",
            self.accepted.len(),
            self.total_weight
        );

        MstResult {
            nodes_visited: self.graph.node_count(),
            edges: self.accepted,
            total_weight: self.total_weight,
            elapsed: self.elapsed,
            labels: self.labels,
        }
    }
}

impl Iterator for MstRun<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let started = Instant::now();
        let mut step = None;

        while step.is_none() && !self.is_finished() {
            let edge = self.candidates[self.cursor];
            self.cursor += 1;

            if !self.forest.union(edge.from, edge.to) {
                log::trace!("reject edge {}-{}: would close a cycle", edge.from, edge.to);
                continue;
            }

            self.total_weight += edge.weight;
            self.labels.push(format!(
                "{}-{}",
                self.graph.display_label(edge.from),
                self.graph.display_label(edge.to)
            ));
            self.accepted.push(edge.clone());
            log::trace!(
                "accept edge {}-{} weight={} total={}",
                edge.from,
                edge.to,
                edge.weight,
                self.total_weight
            );

            step = Some(Step::EdgeAccepted {
                source: edge.from,
                target: edge.to,
                weight: edge.weight,
                total: self.total_weight,
            });
        }

        self.elapsed += started.elapsed();
        step
    }
}

impl FusedIterator for MstRun<'_> {}

/// Run Kruskal to completion.
///
/// # Errors
/// * `GraphError::InsufficientNodes` - fewer than 2 nodes
pub fn minimum_spanning_tree(graph: &Graph) -> GraphResult<MstResult> {
    Ok(MstRun::new(graph)?.finish())
}
