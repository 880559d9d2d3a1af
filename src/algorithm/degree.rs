//! 度数报告

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};

/// 单个顶点的度数信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeEntry {
    pub id: VertexId,
    pub in_degree: usize,
    pub out_degree: usize,
    pub total: usize,
}

/// 全图度数报告（按顶点插入顺序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeReport {
    pub entries: Vec<DegreeEntry>,
}

/// 生成每个顶点的入度/出度/总度数报告
///
/// 唯一前置条件是图非空。
pub fn degree_report(graph: &Graph) -> Result<DegreeReport> {
    if graph.vertex_count() == 0 {
        return Err(Error::EmptyGraph);
    }

    let entries = graph
        .vertices()
        .map(|vertex| DegreeEntry {
            id: vertex.id(),
            in_degree: vertex.in_degree(),
            out_degree: vertex.out_degree(),
            total: vertex.in_degree() + vertex.out_degree(),
        })
        .collect();

    Ok(DegreeReport { entries })
}
