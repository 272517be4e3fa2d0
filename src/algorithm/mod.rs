//! 图算法模块
//!
//! 遍历与排序、强连通分量、最短路径、最大流和着色。
//! 所有算法实现为 [`Graph`](crate::graph::Graph) 的方法，
//! 按算法族拆分到各自的文件中。

mod coloring;
mod max_flow;
mod scc;
mod shortest_path;
mod traversal;

pub use shortest_path::{BellmanFordPaths, ShortestPaths};
pub use traversal::BfsTree;
