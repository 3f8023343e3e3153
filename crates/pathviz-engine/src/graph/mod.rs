//! Graph model: nodes with positions, undirected weighted edges.
//!
//! # Components
//!
//! - **types**: `NodeId`, `Position`, `Node`, `Edge`, `EdgeKey`, `WeightSource`
//! - **model**: `Graph` with incremental adjacency and Euclidean weights
//! - **snapshot**: persisted node/edge lists (JSON)
//! - **presets**: grid, star, tree and complete example graphs
//!
//! The graph never holds per-run algorithm state; runs borrow it
//! immutably and keep their own `TraversalState`.

mod model;
pub mod presets;
mod snapshot;
mod types;


pub use self::model::Graph;
pub use self::snapshot::{EdgeRecord, GraphSnapshot, NodeRecord};
pub use self::types::{default_label, Edge, EdgeKey, Node, NodeId, Position, WeightSource};
