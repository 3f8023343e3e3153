//! Path reconstruction from predecessor links.

use crate::graph::{EdgeKey, Graph, NodeId};

use super::state::TraversalState;

/// Walk predecessors from `end` back to `start`.
///
/// Returns `None` if `end` is unreached or the chain does not lead to
/// `start`.
pub(crate) fn reconstruct_path(
    state: &TraversalState,
    start: NodeId,
    end: NodeId,
) -> Option<Vec<NodeId>> {
    if !state.get(end)?.is_reached() {
        return None;
    }

    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = state.previous(current)?;
        path.push(current);
        // Predecessor links of a finished run form a tree; bail on anything else
        if path.len() > state.len() {
            return None;
        }
    }

    path.reverse();
    Some(path)
}

/// Edges between consecutive path nodes.
pub(crate) fn path_edges(path: &[NodeId]) -> Vec<EdgeKey> {
    path.windows(2).map(|w| EdgeKey::new(w[0], w[1])).collect()
}

/// Sum of edge weights along `path`.
pub(crate) fn path_weight(graph: &Graph, path: &[NodeId]) -> f64 {
    path.windows(2)
        .map(|w| graph.edge_between(w[0], w[1]).map_or(f64::INFINITY, |e| e.weight))
        .sum()
}
