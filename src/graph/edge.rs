//! 边定义
//!
//! 有向边记录：除端点外携带容量、流量与颜色等附加属性

use crate::types::{VertexId, Weight};
use serde::{Deserialize, Serialize};

/// 有向边
///
/// 由其源顶点独占持有。流算法要求：若存在容量为正的边 (u -> v)，
/// 调用方必须同时建立反向边 (v -> u)（容量可以为 0）作为残余边，
/// 否则推流时返回 [`Error::MissingReverseEdge`](crate::Error::MissingReverseEdge)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 源顶点 ID
    from: VertexId,
    /// 目标顶点 ID
    to: VertexId,
    /// 容量
    capacity: Weight,
    /// 当前流量
    flow: Weight,
    /// 边颜色（0 表示未着色）
    color: usize,
}

impl Edge {
    /// 创建新边，流量为 0，未着色
    pub fn new(from: VertexId, to: VertexId, capacity: Weight) -> Self {
        Self {
            from,
            to,
            capacity,
            flow: 0.0,
            color: 0,
        }
    }

    /// 获取源顶点 ID
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// 获取目标顶点 ID
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// 获取容量
    pub fn capacity(&self) -> Weight {
        self.capacity
    }

    /// 获取当前流量
    pub fn flow(&self) -> Weight {
        self.flow
    }

    /// 获取边颜色
    pub fn color(&self) -> usize {
        self.color
    }

    /// 残余容量 = 容量 - 当前流量
    pub fn residual_capacity(&self) -> Weight {
        self.capacity - self.flow
    }

    /// 调整流量（正向推流为正，回退为负）
    pub(crate) fn add_flow(&mut self, delta: Weight) {
        self.flow += delta;
    }

    /// 流量清零
    pub(crate) fn reset_flow(&mut self) {
        self.flow = 0.0;
    }

    /// 设置边颜色
    pub(crate) fn set_color(&mut self, color: usize) {
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_defaults() {
        let e = Edge::new(0, 1, 10.0);

        assert_eq!(e.from(), 0);
        assert_eq!(e.to(), 1);
        assert_eq!(e.capacity(), 10.0);
        assert_eq!(e.flow(), 0.0);
        assert_eq!(e.color(), 0);
    }

    #[test]
    fn test_residual_capacity() {
        let mut e = Edge::new(0, 1, 10.0);
        e.add_flow(4.0);

        assert_eq!(e.flow(), 4.0);
        assert_eq!(e.residual_capacity(), 6.0);

        e.add_flow(-4.0);
        assert_eq!(e.residual_capacity(), 10.0);
    }
}
