//! 通用类型定义

/// 顶点 ID（稠密小整数，便于算法用数组下标索引临时状态）
///
/// 顶点存储回收已删除的最小空闲 ID，因此 ID 在删除后不是稳定句柄：
/// 删除顶点 k 之后的下一次插入会再次分配 k。
pub type VertexId = usize;

/// 边权重 / 容量 / 流量的数值类型
pub type Weight = f64;
