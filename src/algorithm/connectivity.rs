//! 连通性算法
//!
//! 弱连通性检查（忽略边方向的 BFS）和 Kosaraju 强连通分量

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// 图是否弱连通
///
/// 从第一个插入的顶点出发，同时沿出边和入边做 BFS；
/// 所有顶点都被访问到即为弱连通。空图视为弱连通。
pub fn is_weakly_connected(graph: &Graph) -> bool {
    let start = match graph.vertices().next() {
        Some(vertex) => vertex.id(),
        None => return true,
    };

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if let Some(vertex) = graph.get_vertex(current) {
            for &neighbor in vertex.out_neighbors().iter().chain(vertex.in_neighbors()) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    visited.len() == graph.vertex_count()
}

/// Kosaraju 强连通分量算法
///
/// 两遍 DFS：第一遍沿出边记录完成顺序，第二遍在转置图上按完成时间
/// 倒序收集分量。
pub struct Kosaraju<'a> {
    graph: &'a Graph,
}

impl<'a> Kosaraju<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算强连通分量划分
    ///
    /// 每个顶点恰好属于一个分量，分量内按 DFS 发现顺序排列。
    pub fn components(&self) -> Result<Vec<Vec<VertexId>>> {
        if self.graph.vertex_count() == 0 {
            return Err(Error::EmptyGraph);
        }

        // 第一遍 DFS：完成顺序入栈
        let mut visited = HashSet::new();
        let mut finish_stack = Vec::new();
        for vertex in self.graph.vertices() {
            if !visited.contains(&vertex.id()) {
                self.fill_finish_order(vertex.id(), &mut visited, &mut finish_stack);
            }
        }

        // 转置图邻接表（同顶点集，所有边反向）
        let mut transposed: HashMap<VertexId, BTreeSet<VertexId>> = HashMap::new();
        for edge in self.graph.edges() {
            transposed.entry(edge.to()).or_default().insert(edge.from());
        }

        // 第二遍：按完成时间倒序在转置图上做 DFS
        visited.clear();
        let mut components = Vec::new();
        while let Some(id) = finish_stack.pop() {
            if !visited.contains(&id) {
                let mut component = Vec::new();
                Self::collect_component(id, &transposed, &mut visited, &mut component);
                components.push(component);
            }
        }

        Ok(components)
    }

    fn fill_finish_order(
        &self,
        id: VertexId,
        visited: &mut HashSet<VertexId>,
        finish_stack: &mut Vec<VertexId>,
    ) {
        visited.insert(id);

        if let Some(vertex) = self.graph.get_vertex(id) {
            for &neighbor in vertex.out_neighbors() {
                if !visited.contains(&neighbor) {
                    self.fill_finish_order(neighbor, visited, finish_stack);
                }
            }
        }

        finish_stack.push(id);
    }

    fn collect_component(
        id: VertexId,
        transposed: &HashMap<VertexId, BTreeSet<VertexId>>,
        visited: &mut HashSet<VertexId>,
        component: &mut Vec<VertexId>,
    ) {
        visited.insert(id);
        component.push(id);

        if let Some(predecessors) = transposed.get(&id) {
            for &neighbor in predecessors {
                if !visited.contains(&neighbor) {
                    Self::collect_component(neighbor, transposed, visited, component);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn add_vertices(graph: &mut Graph, n: usize) -> Vec<VertexId> {
        (0..n).map(|_| graph.add_vertex(Point::default())).collect()
    }

    #[test]
    fn test_empty_graph_weakly_connected() {
        let graph = Graph::new();
        assert!(is_weakly_connected(&graph));
    }

    #[test]
    fn test_weak_connectivity_ignores_direction() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 3);
        // 1 <- 2 -> 3：沿有向边无法互达，弱连通成立
        graph.add_edge(v[1], v[0]);
        graph.add_edge(v[1], v[2]);

        assert!(is_weakly_connected(&graph));
    }

    #[test]
    fn test_disconnected_graph() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 4);
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[2], v[3]);

        assert!(!is_weakly_connected(&graph));
    }

    #[test]
    fn test_scc_two_cycles() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 6);
        // 环 1-2-3 和环 4-5-6，单向桥 3 -> 4
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[1], v[2]);
        graph.add_edge(v[2], v[0]);
        graph.add_edge(v[3], v[4]);
        graph.add_edge(v[4], v[5]);
        graph.add_edge(v[5], v[3]);
        graph.add_edge(v[2], v[3]);

        let components = Kosaraju::new(&graph).components().unwrap();
        assert_eq!(components.len(), 2);

        let mut sizes: Vec<usize> = components.iter().map(|c| c.len()).collect();
        sizes.sort();
        assert_eq!(sizes, vec![3, 3]);
    }

    #[test]
    fn test_scc_dag_singletons() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 4);
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[1], v[2]);
        graph.add_edge(v[2], v[3]);

        let components = Kosaraju::new(&graph).components().unwrap();
        assert_eq!(components.len(), 4);
        assert!(components.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_scc_partition_covers_all_vertices() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 5);
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[1], v[0]);
        graph.add_edge(v[1], v[2]);
        graph.add_edge(v[3], v[4]);

        let components = Kosaraju::new(&graph).components().unwrap();

        let mut all: Vec<VertexId> = components.iter().flatten().copied().collect();
        all.sort();
        let mut expected: Vec<VertexId> = graph.vertex_ids().collect();
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_scc_empty_graph() {
        let graph = Graph::new();
        assert_eq!(
            Kosaraju::new(&graph).components(),
            Err(Error::EmptyGraph)
        );
    }
}
