//! 性能指标收集模块
//!
//! 提供图操作与算法调用计数的收集和导出功能

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// 系统全局指标
#[derive(Debug)]
pub struct Metrics {
    /// 图操作统计
    graph_stats: GraphStats,
    /// 启动时间
    start_time: Instant,
}

/// 图操作统计
#[derive(Debug)]
struct GraphStats {
    /// 顶点插入数
    vertices_inserted: AtomicU64,
    /// 顶点删除数
    vertices_removed: AtomicU64,
    /// 边插入数
    edges_inserted: AtomicU64,
    /// 边删除数
    edges_removed: AtomicU64,
    /// 算法调用数
    algorithm_runs: AtomicU64,
}

/// 可导出的指标快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub vertices_inserted: u64,
    pub vertices_removed: u64,
    pub edges_inserted: u64,
    pub edges_removed: u64,
    pub algorithm_runs: u64,
    pub uptime_seconds: u64,
}

impl Metrics {
    /// 创建新的指标收集器
    pub fn new() -> Self {
        Self {
            graph_stats: GraphStats {
                vertices_inserted: AtomicU64::new(0),
                vertices_removed: AtomicU64::new(0),
                edges_inserted: AtomicU64::new(0),
                edges_removed: AtomicU64::new(0),
                algorithm_runs: AtomicU64::new(0),
            },
            start_time: Instant::now(),
        }
    }

    /// 记录顶点插入
    pub fn record_vertex_insert(&self) {
        self.graph_stats
            .vertices_inserted
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录顶点删除
    pub fn record_vertex_remove(&self) {
        self.graph_stats
            .vertices_removed
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录边插入
    pub fn record_edge_insert(&self) {
        self.graph_stats
            .edges_inserted
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录边删除
    pub fn record_edge_remove(&self) {
        self.graph_stats
            .edges_removed
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录一次算法调用
    pub fn record_algorithm_run(&self) {
        self.graph_stats
            .algorithm_runs
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 获取指标快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            vertices_inserted: self.graph_stats.vertices_inserted.load(Ordering::Relaxed),
            vertices_removed: self.graph_stats.vertices_removed.load(Ordering::Relaxed),
            edges_inserted: self.graph_stats.edges_inserted.load(Ordering::Relaxed),
            edges_removed: self.graph_stats.edges_removed.load(Ordering::Relaxed),
            algorithm_runs: self.graph_stats.algorithm_runs.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// 重置所有指标
    pub fn reset(&self) {
        self.graph_stats.vertices_inserted.store(0, Ordering::Relaxed);
        self.graph_stats.vertices_removed.store(0, Ordering::Relaxed);
        self.graph_stats.edges_inserted.store(0, Ordering::Relaxed);
        self.graph_stats.edges_removed.store(0, Ordering::Relaxed);
        self.graph_stats.algorithm_runs.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// 全局指标实例
static METRICS: once_cell::sync::Lazy<Arc<Metrics>> =
    once_cell::sync::Lazy::new(|| Arc::new(Metrics::new()));

/// 获取全局指标实例
pub fn global_metrics() -> Arc<Metrics> {
    METRICS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_snapshot() {
        let metrics = Metrics::new();

        metrics.record_vertex_insert();
        metrics.record_vertex_insert();
        metrics.record_edge_insert();
        metrics.record_algorithm_run();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.vertices_inserted, 2);
        assert_eq!(snapshot.edges_inserted, 1);
        assert_eq!(snapshot.algorithm_runs, 1);
        assert_eq!(snapshot.vertices_removed, 0);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = Metrics::new();
        metrics.record_vertex_insert();
        metrics.reset();

        assert_eq!(metrics.snapshot().vertices_inserted, 0);
    }
}
