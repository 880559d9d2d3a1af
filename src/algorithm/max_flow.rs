//! 最大流算法
//!
//! 实现 Edmonds-Karp 算法（基于 BFS 的 Ford-Fulkerson）。
//! 算法在私有残量网络上迭代，从不修改输入图。

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// 最大流结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxFlow {
    /// 最大流量值
    pub value: u64,
    /// 流量分配（原图的边 -> 实际流量，仅正流量）
    pub flow: HashMap<(VertexId, VertexId), u64>,
    /// 最小割的源侧顶点集（残量网络上从源点可达的顶点）
    pub source_side: HashSet<VertexId>,
}

/// Edmonds-Karp 最大流算法
pub struct EdmondsKarp<'a> {
    graph: &'a Graph,
}

impl<'a> EdmondsKarp<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算从 source 到 sink 的最大流
    ///
    /// 两个 ID 必须都属于本图；source == sink 时直接返回零流。
    /// 汇点不可达不是错误，此时收敛到零流。
    pub fn max_flow(&self, source: VertexId, sink: VertexId) -> Result<MaxFlow> {
        if !self.graph.contains_vertex(source) {
            return Err(Error::VertexNotFound(source.as_u64()));
        }
        if !self.graph.contains_vertex(sink) {
            return Err(Error::VertexNotFound(sink.as_u64()));
        }
        if source == sink {
            return Ok(MaxFlow {
                value: 0,
                flow: HashMap::new(),
                source_side: HashSet::new(),
            });
        }

        // 残量表：正向容量 = 边权重，配对的反向容量初始为 0。
        // 反平行的原始边已经占用 (v, u) 时不覆盖它。
        let mut residual: HashMap<(VertexId, VertexId), u64> = HashMap::new();
        let mut adjacency: HashMap<VertexId, BTreeSet<VertexId>> = HashMap::new();
        for edge in self.graph.edges() {
            residual.insert((edge.from(), edge.to()), edge.weight());
            residual.entry((edge.to(), edge.from())).or_insert(0);
            adjacency.entry(edge.from()).or_default().insert(edge.to());
            adjacency.entry(edge.to()).or_default().insert(edge.from());
        }

        // Edmonds-Karp：重复 BFS 找增广路径直到不存在
        let mut value: u64 = 0;
        loop {
            let parent = Self::find_augmenting_path(source, sink, &residual, &adjacency);
            if !parent.contains_key(&sink) {
                break;
            }

            let bottleneck = Self::bottleneck_along(source, sink, &parent, &residual);
            Self::push_along(source, sink, bottleneck, &parent, &mut residual);
            value += bottleneck;
        }

        // 最小割源侧：终态残量网络上从源点可达的顶点
        let source_side = Self::reachable_from(source, &residual, &adjacency);

        // 每条原始边的实际流量 = 容量 - 剩余残量
        let mut flow = HashMap::new();
        for edge in self.graph.edges() {
            let remaining = residual
                .get(&(edge.from(), edge.to()))
                .copied()
                .unwrap_or(0);
            if remaining < edge.weight() {
                flow.insert((edge.from(), edge.to()), edge.weight() - remaining);
            }
        }

        Ok(MaxFlow {
            value,
            flow,
            source_side,
        })
    }

    /// BFS 找增广路径，返回前驱表；表中含 sink 即找到路径
    fn find_augmenting_path(
        source: VertexId,
        sink: VertexId,
        residual: &HashMap<(VertexId, VertexId), u64>,
        adjacency: &HashMap<VertexId, BTreeSet<VertexId>>,
    ) -> HashMap<VertexId, VertexId> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut parent = HashMap::new();

        visited.insert(source);
        queue.push_back(source);

        'search: while let Some(current) = queue.pop_front() {
            if let Some(neighbors) = adjacency.get(&current) {
                for &neighbor in neighbors {
                    let remaining = residual.get(&(current, neighbor)).copied().unwrap_or(0);
                    if remaining > 0 && !visited.contains(&neighbor) {
                        visited.insert(neighbor);
                        parent.insert(neighbor, current);
                        if neighbor == sink {
                            break 'search;
                        }
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        parent
    }

    /// 路径上的瓶颈容量（最小残量）
    fn bottleneck_along(
        source: VertexId,
        sink: VertexId,
        parent: &HashMap<VertexId, VertexId>,
        residual: &HashMap<(VertexId, VertexId), u64>,
    ) -> u64 {
        let mut bottleneck = u64::MAX;
        let mut current = sink;
        while current != source {
            match parent.get(&current) {
                Some(&prev) => {
                    let remaining = residual.get(&(prev, current)).copied().unwrap_or(0);
                    bottleneck = bottleneck.min(remaining);
                    current = prev;
                }
                None => break,
            }
        }
        bottleneck
    }

    /// 沿路径推流：正向残量减少，反向残量增加
    fn push_along(
        source: VertexId,
        sink: VertexId,
        amount: u64,
        parent: &HashMap<VertexId, VertexId>,
        residual: &mut HashMap<(VertexId, VertexId), u64>,
    ) {
        let mut current = sink;
        while current != source {
            match parent.get(&current) {
                Some(&prev) => {
                    if let Some(remaining) = residual.get_mut(&(prev, current)) {
                        *remaining -= amount;
                    }
                    *residual.entry((current, prev)).or_insert(0) += amount;
                    current = prev;
                }
                None => break,
            }
        }
    }

    /// 残量网络上从 start 出发可达的顶点集
    fn reachable_from(
        start: VertexId,
        residual: &HashMap<(VertexId, VertexId), u64>,
        adjacency: &HashMap<VertexId, BTreeSet<VertexId>>,
    ) -> HashSet<VertexId> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if let Some(neighbors) = adjacency.get(&current) {
                for &neighbor in neighbors {
                    let remaining = residual.get(&(current, neighbor)).copied().unwrap_or(0);
                    if remaining > 0 && !visited.contains(&neighbor) {
                        visited.insert(neighbor);
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        visited
    }
}
