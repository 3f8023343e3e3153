//! Pathfinding and Spanning-Tree Engine for Interactive Graph Visualization
//!
//! This crate holds the algorithmic core of a graph editor: an editable
//! weighted undirected graph and the algorithms that explore it. Every
//! algorithm runs as a lazy, deterministic sequence of visitation steps
//! that a driver can pull one at a time (for animation) or drain at once.
//!
//! # Architecture
//!
//! - **config**: Engine and preset configuration types
//! - **error**: Error handling with GraphError
//! - **graph**: Graph model, JSON snapshots and preset generators
//! - **traversal**: BFS, DFS, Dijkstra and A* pathfinding runs
//! - **mst**: Kruskal's minimum spanning tree over a disjoint-set union
//! - **engine**: Query-driven entry point over all algorithms
//!
//! # Example
//!
//! ```
//! use pathviz_engine::engine::{run, Query};
//! use pathviz_engine::graph::{Graph, Position};
//! use pathviz_engine::traversal::SearchAlgorithm;
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node(Position::new(0.0, 0.0));
//! let b = graph.add_node(Position::new(30.0, 40.0));
//! let c = graph.add_node(Position::new(60.0, 0.0));
//! graph.add_edge(a, b, None)?;
//! graph.add_edge(b, c, None)?;
//!
//! let mut steps = run(&graph, &Query::path(SearchAlgorithm::AStar, a, c))?;
//! let first = steps.next();
//! assert!(first.is_some());
//!
//! let result = steps.finish();
//! assert_eq!(result.cost(), Some(100.0));
//!
//! let tree = run(&graph, &Query::mst())?.finish();
//! assert_eq!(tree.cost(), Some(100.0));
//! # Ok::<(), pathviz_engine::GraphError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod mst;
pub mod traversal;

// Re-exports for convenience
pub use config::{EngineConfig, PresetConfig};
pub use engine::{find_paths, run, Algorithm, AlgorithmResult, AlgorithmRun, Query};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, EdgeKey, Graph, GraphSnapshot, Node, NodeId, Position, WeightSource};
pub use mst::{minimum_spanning_tree, DisjointSet, MstResult, MstRun};
pub use traversal::{
    astar_search, bfs_search, dfs_search, dijkstra_search, PathResult, PathfindingRun,
    SearchAlgorithm, Step, StepKind, TraversalState,
};
