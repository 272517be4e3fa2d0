//! 遍历与排序算法
//!
//! BFS（全量扫描与路径重构）、环检测和拓扑排序。
//! 所有 DFS 都使用显式工作栈，递归深度不受图规模限制。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::metrics::global_metrics;
use crate::types::VertexId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// BFS 全量扫描结果
///
/// 数组按顶点 ID 下标索引，大小为 [`index_bound`](Graph::index_bound)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BfsTree {
    /// 从起点可达的顶点
    pub visited: Vec<bool>,
    /// BFS 树中每个顶点的前驱（起点与不可达顶点为 None）
    pub predecessor: Vec<Option<VertexId>>,
    /// 顶点的出队顺序
    pub order: Vec<VertexId>,
}

impl<T> Graph<T> {
    /// 从起点做层序全量扫描，返回可达性与前驱状态
    pub fn bfs(&self, start: VertexId) -> Result<BfsTree> {
        if !self.contains_vertex(start) {
            return Err(Error::VertexNotFound(start));
        }
        global_metrics().record_algorithm_run();

        let n = self.index_bound();
        let mut visited = vec![false; n];
        let mut predecessor = vec![None; n];
        let mut order = Vec::new();
        let mut frontier = VecDeque::from([start]);
        visited[start] = true;

        while let Some(v) = frontier.pop_front() {
            order.push(v);
            if let Some(vertex) = self.vertex(v) {
                for neighbor in vertex.neighbors() {
                    if !visited[neighbor] {
                        visited[neighbor] = true;
                        predecessor[neighbor] = Some(v);
                        frontier.push_back(neighbor);
                    }
                }
            }
        }

        Ok(BfsTree {
            visited,
            predecessor,
            order,
        })
    }

    /// BFS 最短路径（按边数），返回起点到终点的顶点序列
    ///
    /// 终点出队即返回；终点不可达时返回 [`Error::NoPath`]。
    pub fn bfs_path(&self, start: VertexId, target: VertexId) -> Result<Vec<VertexId>> {
        if !self.contains_vertex(start) {
            return Err(Error::VertexNotFound(start));
        }
        if !self.contains_vertex(target) {
            return Err(Error::VertexNotFound(target));
        }
        global_metrics().record_algorithm_run();

        let n = self.index_bound();
        let mut visited = vec![false; n];
        let mut predecessor: Vec<Option<VertexId>> = vec![None; n];
        let mut frontier = VecDeque::from([start]);
        visited[start] = true;

        while let Some(v) = frontier.pop_front() {
            if v == target {
                // 沿前驱链回溯重构路径
                let mut path = Vec::new();
                let mut current = Some(target);
                while let Some(c) = current {
                    path.push(c);
                    current = predecessor[c];
                }
                path.reverse();
                return Ok(path);
            }
            if let Some(vertex) = self.vertex(v) {
                for neighbor in vertex.neighbors() {
                    if !visited[neighbor] {
                        visited[neighbor] = true;
                        predecessor[neighbor] = Some(v);
                        frontier.push_back(neighbor);
                    }
                }
            }
        }

        Err(Error::NoPath {
            from: start,
            to: target,
        })
    }

    /// 有向环检测
    ///
    /// 显式栈 DFS 加递归栈标记：命中仍在栈上的顶点即存在回边。
    pub fn is_cyclic(&self) -> bool {
        global_metrics().record_algorithm_run();

        let n = self.index_bound();
        let mut visited = vec![false; n];
        let mut on_stack = vec![false; n];
        // 帧: (顶点, 下一个待检查的出边序号)
        let mut stack: Vec<(VertexId, usize)> = Vec::new();

        for root in self.vertex_ids() {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            on_stack[root] = true;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let v = frame.0;
                let next = self
                    .vertex(v)
                    .and_then(|vertex| vertex.edges().get_index(frame.1))
                    .map(|(&to, _)| to);

                match next {
                    Some(to) => {
                        frame.1 += 1;
                        if !visited[to] {
                            visited[to] = true;
                            on_stack[to] = true;
                            stack.push((to, 0));
                        } else if on_stack[to] {
                            return true;
                        }
                    }
                    None => {
                        on_stack[v] = false;
                        stack.pop();
                    }
                }
            }
        }

        false
    }

    /// 拓扑排序
    ///
    /// 先做环检测，存在环时返回 [`Error::GraphHasCycle`]；
    /// 否则按 DFS 完成序的逆序返回，保证每条边 u -> v 中 u 在 v 之前。
    /// 无关顶点之间只保证 DFS 探索顺序，不保证全序。
    pub fn topological_sort(&self) -> Result<Vec<VertexId>> {
        if self.is_cyclic() {
            return Err(Error::GraphHasCycle);
        }
        global_metrics().record_algorithm_run();

        let mut order = self.dfs_finish_order();
        order.reverse();
        Ok(order)
    }

    /// DFS 完成序（完成时间升序），Kosaraju 第一趟也使用
    pub(crate) fn dfs_finish_order(&self) -> Vec<VertexId> {
        let n = self.index_bound();
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(self.vertex_count());
        let mut stack: Vec<(VertexId, usize)> = Vec::new();

        for root in self.vertex_ids() {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let v = frame.0;
                let next = self
                    .vertex(v)
                    .and_then(|vertex| vertex.edges().get_index(frame.1))
                    .map(|(&to, _)| to);

                match next {
                    Some(to) => {
                        frame.1 += 1;
                        if !visited[to] {
                            visited[to] = true;
                            stack.push((to, 0));
                        }
                    }
                    None => {
                        // 所有出边处理完毕，顶点完成
                        order.push(v);
                        stack.pop();
                    }
                }
            }
        }

        order
    }
}
