//! GraphKit - 通用图引擎
//!
//! 可变顶点/边存储加经典图算法库，支持：
//! - 回收最小空闲 ID 的顶点存储与插入有序邻接表
//! - 遍历与排序（BFS 路径重构、环检测、拓扑排序）
//! - 强连通分量（Tarjan、Kosaraju）
//! - 单源最短路径（Dijkstra、带负权环检测的 Bellman-Ford）
//! - 最大流（Dinic、Goldberg-Tarjan 推送-重标号）
//! - 贪心顶点/边着色

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod types;

// 重导出常用类型
pub use algorithm::{BellmanFordPaths, BfsTree, ShortestPaths};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex, VertexStore};
pub use metrics::{global_metrics, Metrics, MetricsSnapshot};
pub use types::{VertexId, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
