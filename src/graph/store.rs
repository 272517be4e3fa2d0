//! 顶点存储
//!
//! 带空闲槽回收的顶点容器：插入时总是分配当前未使用的最小非负 ID

use crate::graph::vertex::Vertex;
use crate::types::VertexId;
use std::collections::BTreeSet;

/// 顶点存储（空闲链表式 arena）
///
/// ID 是稠密可回收的槽位下标，不是稳定句柄：删除 ID k 之后，
/// 下一次插入会优先复用 k。算法依赖这一稠密性，用 ID 直接索引
/// `visited[id]` 这类定长临时数组。
#[derive(Debug, Clone)]
pub struct VertexStore<T> {
    /// 槽位表，下标即顶点 ID
    slots: Vec<Option<Vertex<T>>>,
    /// 已回收的空闲槽位，按 ID 升序
    free: BTreeSet<VertexId>,
}

impl<T> VertexStore<T> {
    /// 创建空存储
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: BTreeSet::new(),
        }
    }

    /// 插入新顶点，返回分配的 ID（最小空闲槽优先）
    pub fn insert(&mut self, payload: T) -> VertexId {
        if let Some(&id) = self.free.iter().next() {
            self.free.remove(&id);
            self.slots[id] = Some(Vertex::new(id, payload));
            id
        } else {
            let id = self.slots.len();
            self.slots.push(Some(Vertex::new(id, payload)));
            id
        }
    }

    /// 获取顶点
    pub fn get(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// 获取可变顶点
    pub fn get_mut(&mut self, id: VertexId) -> Option<&mut Vertex<T>> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }

    /// 移除顶点，槽位进入空闲链表
    pub fn remove(&mut self, id: VertexId) -> Option<Vertex<T>> {
        let vertex = self.slots.get_mut(id).and_then(Option::take)?;
        self.free.insert(id);
        Some(vertex)
    }

    /// 顶点是否存在
    pub fn contains(&self, id: VertexId) -> bool {
        self.get(id).is_some()
    }

    /// 当前顶点数量
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 下标上界：历史最大 ID + 1，用作算法临时数组的大小
    pub fn index_bound(&self) -> usize {
        self.slots.len()
    }

    /// 按 ID 升序迭代所有顶点（即算法使用的存储迭代顺序）
    pub fn iter(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// 按 ID 升序迭代所有顶点（可变）
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vertex<T>> {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }

    /// 按升序迭代所有在用的顶点 ID
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.iter().map(Vertex::id)
    }
}

impl<T> Default for VertexStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
