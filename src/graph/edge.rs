//! 边定义

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};

/// 未指定权重时的默认边权重
pub const DEFAULT_WEIGHT: u64 = 1;

/// 有向边
///
/// `(from, to)` 的有序点对加非负整数权重。同一有序点对至多一条边；
/// 反方向的 `(to, from)` 是另一条独立的边。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    from: VertexId,
    to: VertexId,
    weight: u64,
}

impl Edge {
    pub(crate) fn new(from: VertexId, to: VertexId, weight: u64) -> Self {
        Self { from, to, weight }
    }

    /// 源顶点 ID
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// 目标顶点 ID
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// 边权重（Dijkstra 的距离、最大流的容量）
    pub fn weight(&self) -> u64 {
        self.weight
    }
}
