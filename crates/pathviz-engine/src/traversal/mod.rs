//! Pathfinding algorithms over the graph model.
//!
//! # Algorithms
//!
//! - **BFS**: FIFO exploration, cost is the hop count
//! - **DFS**: iterative stack exploration, cost is path length - 1
//! - **Dijkstra**: weighted shortest path, stable insertion-order tie-break
//! - **A***: Dijkstra guided by the Euclidean distance to the end node
//!
//! Every algorithm runs as a [`PathfindingRun`]: a lazy iterator of
//! [`Step`]s that owns its [`TraversalState`] and borrows the graph.
//! Pull steps one at a time to animate, or call `finish()` to get the
//! [`PathResult`] directly. Given the same graph and query, the step
//! sequence and result are identical on every run.
//!
//! # Examples
//!
//! ```
//! use pathviz_engine::graph::{Graph, Position};
//! use pathviz_engine::traversal::{bfs_search, dijkstra_search};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node(Position::new(0.0, 0.0));
//! let b = graph.add_node(Position::new(100.0, 0.0));
//! let c = graph.add_node(Position::new(50.0, 10.0));
//! graph.add_edge(a, b, Some(500.0))?;
//! graph.add_edge(a, c, None)?;
//! graph.add_edge(c, b, None)?;
//!
//! assert_eq!(bfs_search(&graph, a, b)?.path, vec![a, b]);
//! assert_eq!(dijkstra_search(&graph, a, b)?.path, vec![a, c, b]);
//! # Ok::<(), pathviz_engine::GraphError>(())
//! ```

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod path;
mod result;
mod run;
mod state;
mod step;


pub use self::astar::{astar_search, euclidean_heuristic};
pub use self::bfs::bfs_search;
pub use self::dfs::dfs_search;
pub use self::dijkstra::dijkstra_search;
pub use self::result::{PathResult, SearchAlgorithm};
pub use self::run::PathfindingRun;
pub use self::state::{NodeState, TraversalState};
pub use self::step::{Step, StepKind};
