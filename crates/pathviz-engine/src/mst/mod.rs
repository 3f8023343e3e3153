//! Minimum spanning tree via Kruskal's algorithm.
//!
//! - **union_find**: `DisjointSet` over node ids
//! - **kruskal**: lazy `MstRun` and its `MstResult`

mod kruskal;
mod union_find;


pub use self::kruskal::{minimum_spanning_tree, MstResult, MstRun};
pub use self::union_find::DisjointSet;
