//! 贪心着色
//!
//! 顺序贪心的顶点着色与边着色，给出的都是色数上界，不保证最优。

use crate::graph::Graph;
use crate::metrics::global_metrics;
use crate::types::VertexId;
use std::collections::HashSet;

impl<T> Graph<T> {
    /// 贪心顶点着色
    ///
    /// 按存储迭代顺序处理每个顶点：收集已着色相邻顶点占用的颜色，
    /// 取最小未占用的非负整数写入 [`Vertex::color`](crate::Vertex::color)。
    /// 出边和入边都算相邻，因此对单向插入的有向边同样保证
    /// 相邻顶点颜色不同。返回 1 + 最大颜色（空图为 0）。
    pub fn color_vertices(&mut self) -> usize {
        global_metrics().record_algorithm_run();

        let n = self.index_bound();
        // 无向意义上的邻接表
        let mut adjacent: Vec<Vec<VertexId>> = vec![Vec::new(); n];
        for vertex in self.vertices() {
            for to in vertex.neighbors() {
                adjacent[vertex.id()].push(to);
                adjacent[to].push(vertex.id());
            }
        }

        let mut colors: Vec<Option<usize>> = vec![None; n];
        // 顶点数是贪心着色需要的颜色数上界
        let mut occupied = vec![false; self.vertex_count()];
        let order: Vec<VertexId> = self.vertex_ids().collect();

        for &v in &order {
            // 标记相邻顶点已占用的颜色
            for &adj in &adjacent[v] {
                if let Some(c) = colors[adj] {
                    occupied[c] = true;
                }
            }
            // 取最小未占用颜色
            let color = (0..occupied.len())
                .find(|&c| !occupied[c])
                .unwrap_or(occupied.len());
            colors[v] = Some(color);
            // 复位标记，供下一个顶点使用
            for &adj in &adjacent[v] {
                if let Some(c) = colors[adj] {
                    occupied[c] = false;
                }
            }
        }

        // 写回顶点并统计
        let mut used = 0;
        for vertex in self.store_mut().iter_mut() {
            if let Some(color) = colors[vertex.id()] {
                vertex.set_color(color);
                used = used.max(color + 1);
            }
        }
        used
    }

    /// 贪心边着色（颜色从 1 开始）
    ///
    /// 按顶点及邻接插入顺序处理每条边：排除其头顶点出边已占用的
    /// 颜色，取最小可用颜色写入 [`Edge::color`](crate::Edge::color)。
    /// 返回使用的最大颜色（无边时为 0）。
    pub fn color_edges(&mut self) -> usize {
        global_metrics().record_algorithm_run();

        // 本次调用重新着色，先清零
        for vertex in self.store_mut().iter_mut() {
            for edge in vertex.edges_mut().values_mut() {
                edge.set_color(0);
            }
        }

        let edge_list: Vec<(VertexId, VertexId)> = self
            .vertices()
            .flat_map(|vertex| {
                let from = vertex.id();
                vertex.neighbors().map(move |to| (from, to))
            })
            .collect();

        let mut max_color = 0;
        for (u, to) in edge_list {
            // 头顶点出边已占用的颜色
            let occupied: HashSet<usize> = self
                .vertex(to)
                .map(|vertex| {
                    vertex
                        .edges()
                        .values()
                        .map(|edge| edge.color())
                        .filter(|&c| c != 0)
                        .collect()
                })
                .unwrap_or_default();

            let mut color = 1;
            while occupied.contains(&color) {
                color += 1;
            }
            if let Some(edge) = self.vertex_mut(u).and_then(|vx| vx.edge_mut(to)) {
                edge.set_color(color);
            }
            max_color = max_color.max(color);
        }

        max_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 无向语义：双向插入
    fn add_undirected(graph: &mut Graph<()>, u: VertexId, v: VertexId) {
        graph.add_edge(u, v, 0.0).unwrap();
        graph.add_edge(v, u, 0.0).unwrap();
    }

    #[test]
    fn test_color_vertices_triangle() {
        let mut graph = Graph::new();
        for _ in 0..3 {
            graph.add_vertex(());
        }
        add_undirected(&mut graph, 0, 1);
        add_undirected(&mut graph, 1, 2);
        add_undirected(&mut graph, 0, 2);

        // 三角形需要 3 种颜色
        assert_eq!(graph.color_vertices(), 3);
    }

    #[test]
    fn test_color_vertices_proper() {
        let mut graph = Graph::new();
        for _ in 0..6 {
            graph.add_vertex(());
        }
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (1, 4)] {
            add_undirected(&mut graph, u, v);
        }

        let used = graph.color_vertices();
        assert!(used >= 2);

        // 任意边两端颜色不同
        for vertex in graph.vertices() {
            for to in vertex.neighbors() {
                let neighbor = graph.vertex(to).unwrap();
                assert_ne!(vertex.color(), neighbor.color(), "edge {}->{to}", vertex.id());
            }
        }
    }

    #[test]
    fn test_color_vertices_one_directional_edges() {
        let mut graph = Graph::new();
        for _ in 0..3 {
            graph.add_vertex(());
        }
        // 只插入单向边，相邻约束仍然成立
        graph.add_edge(0, 1, 0.0).unwrap();
        graph.add_edge(1, 2, 0.0).unwrap();

        graph.color_vertices();
        let color = |v: VertexId| graph.vertex(v).unwrap().color();
        assert_ne!(color(0), color(1));
        assert_ne!(color(1), color(2));
    }

    #[test]
    fn test_color_vertices_empty_and_singleton() {
        let mut graph: Graph<()> = Graph::new();
        assert_eq!(graph.color_vertices(), 0);

        graph.add_vertex(());
        assert_eq!(graph.color_vertices(), 1);
    }

    #[test]
    fn test_color_edges_line() {
        let mut graph = Graph::new();
        for _ in 0..3 {
            graph.add_vertex(());
        }
        graph.add_edge(0, 1, 0.0).unwrap();
        graph.add_edge(1, 2, 0.0).unwrap();

        let used = graph.color_edges();
        assert!(used >= 1);
        // 所有边都拿到了 1 起始的颜色
        for edge in graph.all_edges() {
            assert!(edge.color() >= 1);
        }
    }

    #[test]
    fn test_color_edges_excludes_head_out_edges() {
        let mut graph = Graph::new();
        for _ in 0..3 {
            graph.add_vertex(());
        }
        // 先给 0 -> 1 上色；2 -> 0 的头顶点出边中已有它，必须避开
        graph.add_edge(0, 1, 0.0).unwrap();
        graph.add_edge(2, 0, 0.0).unwrap();

        assert_eq!(graph.color_edges(), 2);
        assert_eq!(graph.edge(0, 1).unwrap().color(), 1);
        assert_eq!(graph.edge(2, 0).unwrap().color(), 2);
    }

    #[test]
    fn test_color_edges_empty() {
        let mut graph: Graph<()> = Graph::new();
        assert_eq!(graph.color_edges(), 0);
    }
}
