//! Error types for graph editing and algorithm queries.
//!
//! Every fallible operation in this crate returns [`GraphResult`]. Errors are
//! reported synchronously at call time and are never retried internally.
//!
//! An unreachable target is NOT an error: pathfinding runs report it as a
//! normal result with an empty path and infinite cost.

use thiserror::Error;

use crate::graph::NodeId;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all graph and engine operations.
#[derive(Error, Debug)]
pub enum GraphError {
    // ========== Graph Structure Errors ==========
    /// Node id is not present in the graph.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// The unordered pair is already connected by an edge.
    #[error("Duplicate edge: {0}-{1} already connected")]
    DuplicateEdge(NodeId, NodeId),

    /// Both endpoints of an edge are the same node.
    #[error("Self-loop rejected at node {0}")]
    SelfLoop(NodeId),

    /// No edge connects the given pair.
    #[error("Edge not found: {0}-{1}")]
    EdgeNotFound(NodeId, NodeId),

    /// Explicit edge weight is not a finite positive number.
    #[error("Invalid edge weight: {0} (must be finite and > 0)")]
    InvalidWeight(f64),

    // ========== Query Errors ==========
    /// Minimum spanning tree needs at least two nodes.
    #[error("Insufficient nodes: need at least {required}, got {actual}")]
    InsufficientNodes { required: usize, actual: usize },

    /// Query descriptor is malformed (missing or identical endpoints).
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    // ========== Configuration Errors ==========
    /// Configuration failed `validate()`.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========== Serialization Errors ==========
    /// Snapshot could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Snapshot input is malformed or inconsistent.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ========== I/O Errors ==========
    /// Snapshot reader or writer failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return GraphError::Io(err.into());
        }
        // Syntax, EOF and data errors come from parsing input
        if err.is_syntax() || err.is_eof() || err.is_data() {
            GraphError::Deserialization(err.to_string())
        } else {
            GraphError::Serialization(err.to_string())
        }
    }
}

// Compile-time verification that GraphError is thread-safe
static_assertions::assert_impl_all!(GraphError: Send, Sync, std::error::Error);
