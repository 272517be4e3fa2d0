//! 错误类型定义

use crate::types::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("未找到负载匹配的顶点")]
    PayloadNotFound,

    #[error("{from} 与 {to} 之间不存在路径")]
    NoPath { from: VertexId, to: VertexId },

    #[error("图中存在环，无法进行拓扑排序")]
    GraphHasCycle,

    #[error("图中存在可达的负权环")]
    NegativeCycle,

    #[error("缺少反向边: {from} -> {to}")]
    MissingReverseEdge { from: VertexId, to: VertexId },
}
