//! 顶点定义

use crate::graph::edge::Edge;
use crate::types::VertexId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 顶点
///
/// 持有稳定整数 ID、任意负载以及按插入顺序排列的邻接表。
/// 每个邻居至多一条出边（不允许平行边）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex<T> {
    /// 顶点 ID
    id: VertexId,
    /// 负载
    payload: T,
    /// 出边：邻居 ID -> 边（插入有序）
    edges: IndexMap<VertexId, Edge>,
    /// 顶点颜色（由 color_vertices 写入）
    color: usize,
}

impl<T> Vertex<T> {
    /// 创建新顶点
    pub fn new(id: VertexId, payload: T) -> Self {
        Self {
            id,
            payload,
            edges: IndexMap::new(),
            color: 0,
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取负载
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// 获取可变负载
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// 所有出边（插入有序）
    pub fn edges(&self) -> &IndexMap<VertexId, Edge> {
        &self.edges
    }

    /// 获取指向某邻居的出边
    pub fn edge(&self, to: VertexId) -> Option<&Edge> {
        self.edges.get(&to)
    }

    /// 出度
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// 出边指向的邻居（插入有序）
    pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.edges.keys().copied()
    }

    /// 获取顶点颜色
    pub fn color(&self) -> usize {
        self.color
    }

    pub(crate) fn edge_mut(&mut self, to: VertexId) -> Option<&mut Edge> {
        self.edges.get_mut(&to)
    }

    pub(crate) fn edges_mut(&mut self) -> &mut IndexMap<VertexId, Edge> {
        &mut self.edges
    }

    /// 插入出边；已有同邻居的边时保持原边不变，返回 false
    pub(crate) fn insert_edge(&mut self, edge: Edge) -> bool {
        let to = edge.to();
        if self.edges.contains_key(&to) {
            return false;
        }
        self.edges.insert(to, edge);
        true
    }

    /// 移除指向某邻居的出边
    pub(crate) fn remove_edge(&mut self, to: VertexId) -> Option<Edge> {
        self.edges.shift_remove(&to)
    }

    pub(crate) fn set_color(&mut self, color: usize) {
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_edges_ordered() {
        let mut v = Vertex::new(0, "a");
        assert!(v.insert_edge(Edge::new(0, 3, 1.0)));
        assert!(v.insert_edge(Edge::new(0, 1, 1.0)));
        assert!(v.insert_edge(Edge::new(0, 2, 1.0)));

        // 邻接表按插入顺序迭代
        let order: Vec<_> = v.neighbors().collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert_eq!(v.degree(), 3);
    }

    #[test]
    fn test_vertex_no_parallel_edges() {
        let mut v = Vertex::new(0, ());
        assert!(v.insert_edge(Edge::new(0, 1, 5.0)));
        // 第二次插入同一邻居不生效，保留首次的容量
        assert!(!v.insert_edge(Edge::new(0, 1, 99.0)));

        assert_eq!(v.degree(), 1);
        assert_eq!(v.edge(1).map(Edge::capacity), Some(5.0));
    }

    #[test]
    fn test_vertex_remove_edge() {
        let mut v = Vertex::new(0, ());
        v.insert_edge(Edge::new(0, 1, 1.0));

        assert!(v.remove_edge(1).is_some());
        assert!(v.remove_edge(1).is_none());
        assert_eq!(v.degree(), 0);
    }
}
