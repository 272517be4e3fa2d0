//! 图数据结构
//!
//! 持有顶点存储并编排所有图算法的可变有向图

use super::edge::Edge;
use super::store::VertexStore;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use crate::metrics::global_metrics;
use crate::types::{VertexId, Weight};
use tracing::debug;

/// 权重函数：给定边的两个端点，返回该边的权重
type WeightFn = Box<dyn Fn(VertexId, VertexId) -> Weight>;

/// 有向图
///
/// 单线程使用：变更操作要求 `&mut self`，算法在调用返回前执行完毕。
/// 需要无向语义时，调用方自行插入 u->v 和 v->u 两条边。
pub struct Graph<T> {
    /// 顶点存储
    store: VertexStore<T>,
    /// 可覆盖的边权重函数（None 时恒为 1）
    weight_fn: Option<WeightFn>,
}

impl<T> Graph<T> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            store: VertexStore::new(),
            weight_fn: None,
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，返回分配的 ID（回收最小空闲 ID）
    pub fn add_vertex(&mut self, payload: T) -> VertexId {
        let id = self.store.insert(payload);
        global_metrics().record_vertex_insert();
        id
    }

    /// 添加顶点并连接初始出边，每个条目为 (目标顶点, 容量)
    pub fn add_vertex_with_edges<I>(&mut self, payload: T, edges: I) -> Result<VertexId>
    where
        I: IntoIterator<Item = (VertexId, Weight)>,
    {
        let id = self.add_vertex(payload);
        for (to, capacity) in edges {
            self.add_edge(id, to, capacity)?;
        }
        Ok(id)
    }

    /// 删除顶点
    ///
    /// 先从其它所有顶点移除指向目标的入边，再删除顶点本身。
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex<T>> {
        if !self.store.contains(id) {
            return Err(Error::VertexNotFound(id));
        }

        let metrics = global_metrics();
        for vertex in self.store.iter_mut() {
            if vertex.remove_edge(id).is_some() {
                metrics.record_edge_remove();
            }
        }

        let vertex = self.store.remove(id).ok_or(Error::VertexNotFound(id))?;
        for _ in vertex.edges().values() {
            metrics.record_edge_remove();
        }
        metrics.record_vertex_remove();
        debug!(id, out_degree = vertex.degree(), "删除顶点");
        Ok(vertex)
    }

    /// 按负载相等删除首个匹配的顶点，返回其 ID
    pub fn remove_vertex_by_payload(&mut self, payload: &T) -> Result<VertexId>
    where
        T: PartialEq,
    {
        let id = self
            .store
            .iter()
            .find(|v| v.payload() == payload)
            .map(Vertex::id)
            .ok_or(Error::PayloadNotFound)?;
        self.remove_vertex(id)?;
        Ok(id)
    }

    // ==================== 边操作 ====================

    /// 添加有向边 u -> v
    ///
    /// 幂等：若边已存在则不做任何修改（保留首次插入的属性）。
    /// 两个端点必须已存在。
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, capacity: Weight) -> Result<()> {
        if !self.store.contains(v) {
            return Err(Error::VertexNotFound(v));
        }
        let vertex = self.store.get_mut(u).ok_or(Error::VertexNotFound(u))?;
        if vertex.insert_edge(Edge::new(u, v, capacity)) {
            global_metrics().record_edge_insert();
        }
        Ok(())
    }

    /// 删除边 u -> v；边不存在不算错误
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        let vertex = self.store.get_mut(u).ok_or(Error::VertexNotFound(u))?;
        if vertex.remove_edge(v).is_some() {
            global_metrics().record_edge_remove();
        }
        Ok(())
    }

    // ==================== 查询 ====================

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.store.get(id)
    }

    /// 获取可变顶点
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<T>> {
        self.store.get_mut(id)
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.store.contains(id)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.store.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.store.iter().map(Vertex::degree).sum()
    }

    /// 是否为空图
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// 按升序迭代所有在用的顶点 ID
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.store.ids()
    }

    /// 按 ID 升序迭代所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.store.iter()
    }

    /// 获取边 u -> v
    pub fn edge(&self, u: VertexId, v: VertexId) -> Option<&Edge> {
        self.store.get(u).and_then(|vertex| vertex.edge(v))
    }

    /// 边 u -> v 是否存在
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edge(u, v).is_some()
    }

    /// 获取顶点的邻居（出边指向的顶点，插入有序）；顶点不存在时为空
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.store
            .get(id)
            .map(|v| v.neighbors().collect())
            .unwrap_or_default()
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, id: VertexId) -> usize {
        self.store.get(id).map(Vertex::degree).unwrap_or(0)
    }

    /// 收集图中所有边
    pub fn all_edges(&self) -> Vec<Edge> {
        self.store
            .iter()
            .flat_map(|v| v.edges().values().cloned())
            .collect()
    }

    /// 下标上界：历史最大 ID + 1，`visited[id]` 这类临时数组的大小
    pub fn index_bound(&self) -> usize {
        self.store.index_bound()
    }

    // ==================== 权重 ====================

    /// 计算边 (u, v) 的权重，默认恒为 1
    ///
    /// 这是唯一的扩展点：通过 [`set_weight_fn`](Self::set_weight_fn)
    /// 覆盖后，Dijkstra、Bellman-Ford 和邻接矩阵都使用新的权重。
    pub fn calculate_element(&self, u: VertexId, v: VertexId) -> Weight {
        match &self.weight_fn {
            Some(f) => f(u, v),
            None => 1.0,
        }
    }

    /// 覆盖边权重函数
    pub fn set_weight_fn<F>(&mut self, f: F)
    where
        F: Fn(VertexId, VertexId) -> Weight + 'static,
    {
        self.weight_fn = Some(Box::new(f));
    }

    /// 生成邻接矩阵，矩阵大小为 [`index_bound`](Self::index_bound)
    ///
    /// 存在边 (u, v) 的位置取 `calculate_element(u, v)`，其余为 0。
    pub fn to_adjacency_matrix(&self) -> Vec<Vec<Weight>> {
        let n = self.index_bound();
        let mut matrix = vec![vec![0.0; n]; n];

        for vertex in self.store.iter() {
            for neighbor in vertex.neighbors() {
                matrix[vertex.id()][neighbor] = self.calculate_element(vertex.id(), neighbor);
            }
        }

        matrix
    }

    // ==================== 内部辅助 ====================

    pub(crate) fn store_mut(&mut self) -> &mut VertexStore<T> {
        &mut self.store
    }

    /// 所有边流量清零（流算法入口调用）
    pub(crate) fn reset_flows(&mut self) {
        for vertex in self.store.iter_mut() {
            for edge in vertex.edges_mut().values_mut() {
                edge.reset_flow();
            }
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
