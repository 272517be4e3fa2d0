//! 单源最短路径
//!
//! Dijkstra（非负权）与 Bellman-Ford（带负权环检测）。
//! 边权重由可覆盖的 [`calculate_element`](Graph::calculate_element)
//! 提供，默认恒为 1，此时等价于无权 BFS 距离。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::metrics::global_metrics;
use crate::types::{VertexId, Weight};
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;
use tracing::warn;

/// Dijkstra 结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPaths {
    /// 距离数组，下标为顶点 ID，不可达为无穷
    pub distances: Vec<Weight>,
    /// 前驱映射：取最后一次成功松弛的边
    pub predecessors: HashMap<VertexId, VertexId>,
}

/// Bellman-Ford 结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BellmanFordPaths {
    /// 距离数组，下标为顶点 ID，不可达为无穷
    pub distances: Vec<Weight>,
    /// 每个顶点从起点重构的完整路径；无有效路径时为空序列
    pub paths: HashMap<VertexId, Vec<VertexId>>,
}

/// f64 距离的全序包装（权重不得为 NaN）
#[derive(Debug, Clone, Copy, PartialEq)]
struct Dist(Weight);

impl Eq for Dist {}

impl PartialOrd for Dist {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dist {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

impl<T> Graph<T> {
    /// Dijkstra 非负权单源最短路径
    ///
    /// 最小优先级边界按暂定距离出队；负权边下行为未定义（不做检查）。
    pub fn dijkstra(&self, start: VertexId) -> Result<ShortestPaths> {
        if !self.contains_vertex(start) {
            return Err(Error::VertexNotFound(start));
        }
        global_metrics().record_algorithm_run();

        let n = self.index_bound();
        let mut distances = vec![Weight::INFINITY; n];
        distances[start] = 0.0;
        let mut predecessors = HashMap::new();

        let mut frontier: PriorityQueue<VertexId, Reverse<Dist>> = PriorityQueue::new();
        frontier.push(start, Reverse(Dist(0.0)));

        while let Some((v, Reverse(Dist(distance)))) = frontier.pop() {
            if distance > distances[v] {
                continue;
            }
            if let Some(vertex) = self.vertex(v) {
                for neighbor in vertex.neighbors() {
                    let candidate = distance + self.calculate_element(v, neighbor);
                    if candidate < distances[neighbor] {
                        distances[neighbor] = candidate;
                        predecessors.insert(neighbor, v);
                        // push 对已有元素等价于降键
                        frontier.push(neighbor, Reverse(Dist(candidate)));
                    }
                }
            }
        }

        Ok(ShortestPaths {
            distances,
            predecessors,
        })
    }

    /// Bellman-Ford 单源最短路径，支持负权边
    ///
    /// 对所有边松弛 |V|-1 轮后再做一轮检查：仍可松弛说明存在
    /// 从起点可达的负权环，返回 [`Error::NegativeCycle`]。
    pub fn bellman_ford(&self, start: VertexId) -> Result<BellmanFordPaths> {
        if !self.contains_vertex(start) {
            return Err(Error::VertexNotFound(start));
        }
        global_metrics().record_algorithm_run();

        let n = self.index_bound();
        let mut distances = vec![Weight::INFINITY; n];
        distances[start] = 0.0;
        let mut parent: Vec<Option<VertexId>> = vec![None; n];

        // 松弛 |V| - 1 轮
        for _ in 1..self.vertex_count().max(1) {
            for vertex in self.vertices() {
                let u = vertex.id();
                if distances[u].is_infinite() {
                    continue;
                }
                for neighbor in vertex.neighbors() {
                    let candidate = distances[u] + self.calculate_element(u, neighbor);
                    if candidate < distances[neighbor] {
                        distances[neighbor] = candidate;
                        parent[neighbor] = Some(u);
                    }
                }
            }
        }

        // 检查轮：仍能松弛即存在负权环
        for vertex in self.vertices() {
            let u = vertex.id();
            if distances[u].is_infinite() {
                continue;
            }
            for neighbor in vertex.neighbors() {
                if distances[u] + self.calculate_element(u, neighbor) < distances[neighbor] {
                    warn!(edge_from = u, edge_to = neighbor, "检测到可达的负权环");
                    return Err(Error::NegativeCycle);
                }
            }
        }

        // 为每个顶点重构从起点出发的路径
        let mut paths = HashMap::new();
        for v in self.vertex_ids() {
            paths.insert(v, reconstruct_path(start, v, &parent));
        }

        Ok(BellmanFordPaths { distances, paths })
    }
}

/// 沿父指针回溯 start 到 target 的路径；链头不是 start 则无有效路径
fn reconstruct_path(
    start: VertexId,
    target: VertexId,
    parent: &[Option<VertexId>],
) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut current = Some(target);
    while let Some(v) = current {
        path.push(v);
        current = parent[v];
    }
    path.reverse();
    if path.first() == Some(&start) {
        path
    } else {
        Vec::new()
    }
}
