//! 顶点定义

use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// 顶点 ID（图内唯一）
///
/// 由所属图的计数器从 1 开始单调分配，删除顶点后不复用。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点
///
/// 持有出邻居与入邻居集合。集合使用 `BTreeSet`，遍历顺序固定为顶点 ID 升序，
/// 这也是所有算法的确定性遍历顺序。坐标仅是画布元数据。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    position: Point,
    out_neighbors: BTreeSet<VertexId>,
    in_neighbors: BTreeSet<VertexId>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, position: Point) -> Self {
        Self {
            id,
            position,
            out_neighbors: BTreeSet::new(),
            in_neighbors: BTreeSet::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取坐标
    pub fn position(&self) -> Point {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// 出邻居集合（ID 升序）
    pub fn out_neighbors(&self) -> &BTreeSet<VertexId> {
        &self.out_neighbors
    }

    /// 入邻居集合（ID 升序）
    pub fn in_neighbors(&self) -> &BTreeSet<VertexId> {
        &self.in_neighbors
    }

    pub fn has_out_neighbor(&self, id: VertexId) -> bool {
        self.out_neighbors.contains(&id)
    }

    pub fn has_in_neighbor(&self, id: VertexId) -> bool {
        self.in_neighbors.contains(&id)
    }

    /// 出度
    pub fn out_degree(&self) -> usize {
        self.out_neighbors.len()
    }

    /// 入度
    pub fn in_degree(&self) -> usize {
        self.in_neighbors.len()
    }

    // 邻居集合只能由所属图维护，保证与边集合同步。
    // 顶点永远不会出现在自己的邻居集合里。

    pub(crate) fn add_out_neighbor(&mut self, id: VertexId) {
        if id != self.id {
            self.out_neighbors.insert(id);
        }
    }

    pub(crate) fn add_in_neighbor(&mut self, id: VertexId) {
        if id != self.id {
            self.in_neighbors.insert(id);
        }
    }

    pub(crate) fn remove_out_neighbor(&mut self, id: VertexId) {
        self.out_neighbors.remove(&id);
    }

    pub(crate) fn remove_in_neighbor(&mut self, id: VertexId) {
        self.in_neighbors.remove(&id);
    }
}
