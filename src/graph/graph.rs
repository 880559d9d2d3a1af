//! 图数据结构
//!
//! 顶点与边由图独占所有，邻居集合在每次变更时与边集合同步更新

use super::edge::{Edge, DEFAULT_WEIGHT};
use super::vertex::{Vertex, VertexId};
use crate::types::Point;
use indexmap::IndexMap;
use tracing::debug;

/// 有向加权图
///
/// 顶点按插入顺序保存，ID 由图内计数器从 1 开始分配，删除后不复用，
/// 仅在 `clear` 时重置。不变式：边集合与两端顶点的出/入邻居集合始终一致；
/// 无自环，同一有序点对至多一条边。
///
/// 单线程数据结构：所有变更都走 `&mut self`，算法只读快照。
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: IndexMap<VertexId, Vertex>,
    edges: IndexMap<(VertexId, VertexId), Edge>,
    next_vertex_id: u64,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            next_vertex_id: 1,
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，返回新分配的 ID
    pub fn add_vertex(&mut self, position: Point) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.vertices.insert(id, Vertex::new(id, position));

        debug!(id = id.as_u64(), "添加顶点");
        id
    }

    /// 删除顶点
    ///
    /// 顶点不存在时静默忽略并返回 false；否则先级联删除所有与其相连的边
    /// （两个方向），再删除顶点本身。
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        if !self.vertices.contains_key(&id) {
            return false;
        }

        let incident: Vec<(VertexId, VertexId)> = self
            .edges
            .keys()
            .filter(|(from, to)| *from == id || *to == id)
            .copied()
            .collect();
        for (from, to) in incident {
            self.remove_edge(from, to);
        }

        // shift_remove 保持剩余顶点的插入顺序
        self.vertices.shift_remove(&id);
        debug!(id = id.as_u64(), "删除顶点");
        true
    }

    /// 移动顶点到新坐标（画布拖拽）；顶点不存在时静默忽略
    pub fn move_vertex(&mut self, id: VertexId, position: Point) -> bool {
        if let Some(vertex) = self.vertices.get_mut(&id) {
            vertex.set_position(position);
            true
        } else {
            false
        }
    }

    /// 通过 ID 获取顶点
    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// 按插入顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// 按插入顺序遍历顶点 ID
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加默认权重的边
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        self.add_edge_with_weight(from, to, DEFAULT_WEIGHT)
    }

    /// 添加指定权重的边
    ///
    /// 自环、端点不属于本图、或同向边已存在时静默忽略并返回 false
    /// （不是错误）。成功时把 `to` 注册为 `from` 的出邻居、`from`
    /// 注册为 `to` 的入邻居。
    pub fn add_edge_with_weight(&mut self, from: VertexId, to: VertexId, weight: u64) -> bool {
        if from == to {
            debug!(from = from.as_u64(), "忽略自环边");
            return false;
        }
        if !self.vertices.contains_key(&from) || !self.vertices.contains_key(&to) {
            debug!(
                from = from.as_u64(),
                to = to.as_u64(),
                "忽略端点不存在的边"
            );
            return false;
        }
        if self.edges.contains_key(&(from, to)) {
            debug!(from = from.as_u64(), to = to.as_u64(), "忽略重复边");
            return false;
        }

        self.edges.insert((from, to), Edge::new(from, to, weight));
        if let Some(vertex) = self.vertices.get_mut(&from) {
            vertex.add_out_neighbor(to);
        }
        if let Some(vertex) = self.vertices.get_mut(&to) {
            vertex.add_in_neighbor(from);
        }

        debug!(from = from.as_u64(), to = to.as_u64(), weight, "添加边");
        true
    }

    /// 删除边
    ///
    /// 边不存在时静默忽略并返回 false；否则同步更新两端顶点的邻居集合。
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        if self.edges.shift_remove(&(from, to)).is_some() {
            if let Some(vertex) = self.vertices.get_mut(&from) {
                vertex.remove_out_neighbor(to);
            }
            if let Some(vertex) = self.vertices.get_mut(&to) {
                vertex.remove_in_neighbor(from);
            }
            debug!(from = from.as_u64(), to = to.as_u64(), "删除边");
            true
        } else {
            false
        }
    }

    /// 精确的有向边查找
    pub fn get_edge(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.edges.get(&(from, to))
    }

    /// 按插入顺序遍历边
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 是否存在 `from -> to` 的边
    pub fn are_connected(&self, from: VertexId, to: VertexId) -> bool {
        self.edges.contains_key(&(from, to))
    }

    // ==================== 度数与邻居 ====================

    /// 顶点的出度；顶点不存在时为 0
    pub fn out_degree(&self, id: VertexId) -> usize {
        self.vertices.get(&id).map(|v| v.out_degree()).unwrap_or(0)
    }

    /// 顶点的入度；顶点不存在时为 0
    pub fn in_degree(&self, id: VertexId) -> usize {
        self.vertices.get(&id).map(|v| v.in_degree()).unwrap_or(0)
    }

    /// 出邻居（ID 升序）
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.vertices
            .get(&id)
            .map(|v| v.out_neighbors().iter().copied().collect())
            .unwrap_or_default()
    }

    /// 入邻居（ID 升序）
    pub fn predecessors(&self, id: VertexId) -> Vec<VertexId> {
        self.vertices
            .get(&id)
            .map(|v| v.in_neighbors().iter().copied().collect())
            .unwrap_or_default()
    }

    // ==================== 空间查询（画布拾取） ====================

    /// 查找坐标命中的顶点
    ///
    /// 返回与 `point` 距离不超过 `radius` 的第一个顶点（插入顺序）。
    pub fn find_vertex_at(&self, point: Point, radius: i32) -> Option<VertexId> {
        self.vertices
            .values()
            .find(|v| v.position().distance_to(&point) <= radius as f64)
            .map(|v| v.id())
    }

    /// 查找坐标命中的边
    ///
    /// 在距离严格小于 `radius` 的边中取点到线段距离最近的一条。
    pub fn find_edge_at(&self, point: Point, radius: i32) -> Option<(VertexId, VertexId)> {
        let mut closest: Option<(VertexId, VertexId)> = None;
        let mut min_distance = radius as f64;

        for edge in self.edges.values() {
            if let (Some(from), Some(to)) = (
                self.vertices.get(&edge.from()),
                self.vertices.get(&edge.to()),
            ) {
                let distance = point.distance_to_segment(&from.position(), &to.position());
                if distance < min_distance {
                    min_distance = distance;
                    closest = Some((edge.from(), edge.to()));
                }
            }
        }

        closest
    }

    // ==================== 清空 ====================

    /// 销毁所有顶点和边，ID 计数器重置为 1
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.next_vertex_id = 1;
        debug!("清空图");
    }
}
