//! 最大流算法
//!
//! 实现 Dinic（分层图阻塞流）与 Goldberg-Tarjan（推送-重标号）。
//!
//! 两个算法都要求成对反向边不变式：凡存在容量为正的边 (u -> v)，
//! 必须同时存在反向边 (v -> u)（容量可以为 0）作为残余边。
//! 推流时缺少反向边会返回 [`Error::MissingReverseEdge`] 并中止，
//! 继续执行会悄悄错报流量。
//!
//! 每次调用入口先把所有边的流量清零，返回值只取决于当前容量。

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::metrics::global_metrics;
use crate::types::{VertexId, Weight};
use std::collections::VecDeque;
use tracing::debug;

impl<T> Graph<T> {
    /// Dinic 最大流
    ///
    /// 反复执行：(a) 从源点沿残余容量 > 0 的边做 BFS 分层，汇点
    /// 不可达则终止；(b) 在分层图上反复 DFS 寻找层级严格 +1 的
    /// 增广路径并推流。返回累计推送的总流量。
    pub fn dinics_algorithm(&mut self, source: VertexId, sink: VertexId) -> Result<Weight> {
        if !self.contains_vertex(source) {
            return Err(Error::VertexNotFound(source));
        }
        if !self.contains_vertex(sink) {
            return Err(Error::VertexNotFound(sink));
        }
        global_metrics().record_algorithm_run();
        if source == sink {
            return Ok(0.0);
        }
        self.reset_flows();

        let mut max_flow = 0.0;
        loop {
            let levels = self.bfs_level_graph(source);
            if levels[sink].is_none() {
                break;
            }
            // 当前弧：每个顶点下一个待尝试的出边序号，本阶段内单调前移
            let mut next_edge = vec![0usize; self.index_bound()];
            loop {
                let flow = self.dfs_blocking_flow(source, sink, &levels, &mut next_edge)?;
                if flow == 0.0 {
                    break;
                }
                max_flow += flow;
            }
        }

        debug!(max_flow, "Dinic 终止");
        Ok(max_flow)
    }

    /// BFS 分层：沿残余容量 > 0 的边给可达顶点赋层级
    fn bfs_level_graph(&self, source: VertexId) -> Vec<Option<usize>> {
        let mut levels = vec![None; self.index_bound()];
        levels[source] = Some(0);
        let mut frontier = VecDeque::from([source]);

        while let Some(v) = frontier.pop_front() {
            let level = match levels[v] {
                Some(level) => level,
                None => continue,
            };
            if let Some(vertex) = self.vertex(v) {
                for edge in vertex.edges().values() {
                    if edge.residual_capacity() > 0.0 && levels[edge.to()].is_none() {
                        levels[edge.to()] = Some(level + 1);
                        frontier.push_back(edge.to());
                    }
                }
            }
        }

        levels
    }

    /// 显式栈 DFS：在分层图中找一条增广路径并推流
    ///
    /// 只沿残余容量 > 0 且层级恰好 +1 的边前进；推送路径上的最小
    /// 残余容量，正向边加流、反向边减流。找不到路径时返回 0。
    fn dfs_blocking_flow(
        &mut self,
        source: VertexId,
        sink: VertexId,
        levels: &[Option<usize>],
        next_edge: &mut [usize],
    ) -> Result<Weight> {
        let mut path = vec![source];

        loop {
            let v = match path.last() {
                Some(&v) => v,
                None => return Ok(0.0),
            };

            if v == sink {
                // 瓶颈 = 路径上最小残余容量
                let mut bottleneck = Weight::INFINITY;
                for pair in path.windows(2) {
                    let residual = self
                        .edge(pair[0], pair[1])
                        .map(Edge::residual_capacity)
                        .unwrap_or(0.0);
                    bottleneck = bottleneck.min(residual);
                }
                // 沿路径推流：朝汇点方向加流，反方向减流
                for i in 0..path.len() - 1 {
                    let (u, to) = (path[i], path[i + 1]);
                    if let Some(edge) = self.vertex_mut(u).and_then(|vx| vx.edge_mut(to)) {
                        edge.add_flow(bottleneck);
                    }
                    match self.vertex_mut(to).and_then(|vx| vx.edge_mut(u)) {
                        Some(reverse) => reverse.add_flow(-bottleneck),
                        None => return Err(Error::MissingReverseEdge { from: to, to: u }),
                    }
                }
                return Ok(bottleneck);
            }

            // 从当前弧起扫描可前进的出边
            let mut advance = None;
            while let Some((&to, edge)) = self
                .vertex(v)
                .and_then(|vertex| vertex.edges().get_index(next_edge[v]))
            {
                let admissible = edge.residual_capacity() > 0.0
                    && levels[to] == levels[v].map(|level| level + 1);
                if admissible {
                    advance = Some(to);
                    break;
                }
                next_edge[v] += 1;
            }

            match advance {
                Some(to) => path.push(to),
                None => {
                    // 出边耗尽：回退，并前移父顶点的当前弧
                    path.pop();
                    if let Some(&parent) = path.last() {
                        next_edge[parent] += 1;
                    }
                }
            }
        }
    }

    /// Goldberg-Tarjan 推送-重标号最大流
    ///
    /// 源点高度初始化为顶点数并饱和其所有出边；随后按 FIFO 顺序
    /// 选取仍有过剩流的活跃顶点，沿可接纳边（残余容量 > 0 且
    /// 高度恰好高 1）推流，推不动时抬升到残余邻居最小高度 + 1。
    /// 所有非源汇顶点过剩流耗尽后返回汇点累计的过剩流。
    pub fn goldberg_tarjan(&mut self, source: VertexId, sink: VertexId) -> Result<Weight> {
        if !self.contains_vertex(source) {
            return Err(Error::VertexNotFound(source));
        }
        if !self.contains_vertex(sink) {
            return Err(Error::VertexNotFound(sink));
        }
        global_metrics().record_algorithm_run();
        if source == sink {
            return Ok(0.0);
        }
        self.reset_flows();

        let n = self.index_bound();
        let mut height = vec![0usize; n];
        let mut excess = vec![0.0; n];
        height[source] = self.vertex_count();

        // 预流：饱和源点的所有出边
        let source_edges: Vec<(VertexId, Weight)> = self
            .vertex(source)
            .map(|vertex| {
                vertex
                    .edges()
                    .values()
                    .map(|edge| (edge.to(), edge.capacity()))
                    .collect()
            })
            .unwrap_or_default();
        for (to, capacity) in source_edges {
            if capacity <= 0.0 {
                continue;
            }
            if let Some(edge) = self.vertex_mut(source).and_then(|vx| vx.edge_mut(to)) {
                edge.add_flow(capacity);
            }
            match self.vertex_mut(to).and_then(|vx| vx.edge_mut(source)) {
                Some(reverse) => reverse.add_flow(-capacity),
                None => return Err(Error::MissingReverseEdge { from: to, to: source }),
            }
            excess[to] += capacity;
            excess[source] -= capacity;
        }

        // FIFO 活跃顶点队列
        let mut active: VecDeque<VertexId> = VecDeque::new();
        let mut in_queue = vec![false; n];
        for v in self.vertex_ids() {
            if v != source && v != sink && excess[v] > 0.0 {
                active.push_back(v);
                in_queue[v] = true;
            }
        }

        while let Some(u) = active.pop_front() {
            in_queue[u] = false;

            // 卸载：推空过剩流，推不动就重标号
            while excess[u] > 0.0 {
                let admissible = self.vertex(u).and_then(|vertex| {
                    vertex
                        .edges()
                        .values()
                        .find(|edge| {
                            edge.residual_capacity() > 0.0
                                && height[u] == height[edge.to()] + 1
                        })
                        .map(|edge| (edge.to(), edge.residual_capacity()))
                });

                if let Some((to, residual)) = admissible {
                    let delta = excess[u].min(residual);
                    if let Some(edge) = self.vertex_mut(u).and_then(|vx| vx.edge_mut(to)) {
                        edge.add_flow(delta);
                    }
                    match self.vertex_mut(to).and_then(|vx| vx.edge_mut(u)) {
                        Some(reverse) => reverse.add_flow(-delta),
                        None => return Err(Error::MissingReverseEdge { from: to, to: u }),
                    }
                    excess[u] -= delta;
                    excess[to] += delta;
                    if to != source && to != sink && !in_queue[to] {
                        active.push_back(to);
                        in_queue[to] = true;
                    }
                } else {
                    // 重标号：抬升到残余邻居最小高度 + 1
                    let min_height = self
                        .vertex(u)
                        .into_iter()
                        .flat_map(|vertex| vertex.edges().values())
                        .filter(|edge| edge.residual_capacity() > 0.0)
                        .map(|edge| height[edge.to()])
                        .min();
                    match min_height {
                        Some(h) => height[u] = h + 1,
                        // 无残余出边，过剩流无处可去
                        None => break,
                    }
                }
            }
        }

        debug!(max_flow = excess[sink], "推送-重标号终止");
        Ok(excess[sink])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 让 RUST_LOG 控制测试期间的算法日志输出
    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    /// 插入正向边及其容量为 0 的反向残余边
    fn add_flow_edge(graph: &mut Graph<()>, u: VertexId, v: VertexId, capacity: Weight) {
        graph.add_edge(u, v, capacity).unwrap();
        graph.add_edge(v, u, 0.0).unwrap();
    }

    /// 经典最大流测试网络，最大流 15
    ///
    ///     10       10
    /// s -----> a -----> t
    /// |        ^        ^
    /// |5       |5       |
    /// v        |        |10
    /// b -----> c ------>+
    ///     10
    fn classic_network() -> (Graph<()>, VertexId, VertexId) {
        let mut graph = Graph::new();
        let s = graph.add_vertex(());
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        let t = graph.add_vertex(());

        add_flow_edge(&mut graph, s, a, 10.0);
        add_flow_edge(&mut graph, s, b, 5.0);
        add_flow_edge(&mut graph, a, t, 10.0);
        add_flow_edge(&mut graph, b, c, 10.0);
        add_flow_edge(&mut graph, c, a, 5.0);
        add_flow_edge(&mut graph, c, t, 10.0);

        (graph, s, t)
    }

    /// 菱形网络：source -> {a, b} -> sink，每条边容量 1，最大流 2
    fn diamond() -> (Graph<()>, VertexId, VertexId) {
        let mut graph = Graph::new();
        let source = graph.add_vertex(());
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let sink = graph.add_vertex(());

        add_flow_edge(&mut graph, source, a, 1.0);
        add_flow_edge(&mut graph, source, b, 1.0);
        add_flow_edge(&mut graph, a, sink, 1.0);
        add_flow_edge(&mut graph, b, sink, 1.0);

        (graph, source, sink)
    }

    #[test]
    fn test_dinic_diamond() {
        let (mut graph, source, sink) = diamond();
        let flow = graph.dinics_algorithm(source, sink).unwrap();
        assert!((flow - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_goldberg_tarjan_diamond() {
        let (mut graph, source, sink) = diamond();
        let flow = graph.goldberg_tarjan(source, sink).unwrap();
        assert!((flow - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_dinic_classic_network() {
        init_tracing();
        let (mut graph, s, t) = classic_network();
        let flow = graph.dinics_algorithm(s, t).unwrap();
        assert!((flow - 15.0).abs() < 1e-9, "expected 15, got {flow}");
    }

    #[test]
    fn test_goldberg_tarjan_classic_network() {
        let (mut graph, s, t) = classic_network();
        let flow = graph.goldberg_tarjan(s, t).unwrap();
        assert!((flow - 15.0).abs() < 1e-9, "expected 15, got {flow}");
    }

    #[test]
    fn test_algorithms_agree_and_rerun_deterministic() {
        let (mut graph, s, t) = classic_network();

        let dinic = graph.dinics_algorithm(s, t).unwrap();
        // 入口清零流量，重复调用结果一致
        let dinic_again = graph.dinics_algorithm(s, t).unwrap();
        let push_relabel = graph.goldberg_tarjan(s, t).unwrap();

        assert!((dinic - dinic_again).abs() < 1e-9);
        assert!((dinic - push_relabel).abs() < 1e-9);
    }

    #[test]
    fn test_bottleneck_on_line() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let c = graph.add_vertex(());
        add_flow_edge(&mut graph, a, b, 5.0);
        add_flow_edge(&mut graph, b, c, 3.0);

        assert!((graph.dinics_algorithm(a, c).unwrap() - 3.0).abs() < 1e-9);
        assert!((graph.goldberg_tarjan(a, c).unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_reverse_edge_aborts() {
        let mut graph = Graph::new();
        let s = graph.add_vertex(());
        let t = graph.add_vertex(());
        // 故意不建反向边
        graph.add_edge(s, t, 4.0).unwrap();

        assert_eq!(
            graph.dinics_algorithm(s, t),
            Err(Error::MissingReverseEdge { from: t, to: s })
        );
        assert_eq!(
            graph.goldberg_tarjan(s, t),
            Err(Error::MissingReverseEdge { from: t, to: s })
        );
    }

    #[test]
    fn test_sink_unreachable_is_zero_flow() {
        let mut graph = Graph::new();
        let s = graph.add_vertex(());
        let t = graph.add_vertex(());
        // 没有任何边

        assert_eq!(graph.dinics_algorithm(s, t), Ok(0.0));
        assert_eq!(graph.goldberg_tarjan(s, t), Ok(0.0));
    }
}
