//! 拓扑排序
//!
//! 基于 DFS 后序逆序的拓扑排序，附带递归栈法的有向环检测

use super::connectivity::is_weakly_connected;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use std::collections::HashSet;

/// 拓扑排序算法
///
/// 前置条件：图非空、弱连通且无有向环。从每个未访问顶点（插入顺序）
/// 出发沿出边 DFS，顶点在自身及后代全部完成时记入后序序列，
/// 最终结果是后序的逆序。
pub struct TopoSort<'a> {
    graph: &'a Graph,
}

impl<'a> TopoSort<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算拓扑顺序
    ///
    /// 对每条边 `u -> v`，结果中 `u` 都排在 `v` 之前。
    pub fn sort(&self) -> Result<Vec<VertexId>> {
        self.validate()?;

        let mut visited = HashSet::new();
        let mut post_order = Vec::with_capacity(self.graph.vertex_count());
        for vertex in self.graph.vertices() {
            if !visited.contains(&vertex.id()) {
                self.sort_dfs(vertex.id(), &mut visited, &mut post_order);
            }
        }

        post_order.reverse();
        Ok(post_order)
    }

    /// 前置校验：非空、弱连通、无环
    fn validate(&self) -> Result<()> {
        if self.graph.vertex_count() == 0 {
            return Err(Error::EmptyGraph);
        }
        if !is_weakly_connected(self.graph) {
            return Err(Error::NotWeaklyConnected);
        }

        let mut visited = HashSet::new();
        let mut recursion_stack = HashSet::new();
        for vertex in self.graph.vertices() {
            if !visited.contains(&vertex.id())
                && self.has_cycle(vertex.id(), &mut visited, &mut recursion_stack)
            {
                return Err(Error::CycleDetected);
            }
        }

        Ok(())
    }

    /// 有向环检测：递归栈上的顶点被再次访问即为环
    fn has_cycle(
        &self,
        id: VertexId,
        visited: &mut HashSet<VertexId>,
        recursion_stack: &mut HashSet<VertexId>,
    ) -> bool {
        if recursion_stack.contains(&id) {
            return true;
        }
        if visited.contains(&id) {
            return false;
        }

        visited.insert(id);
        recursion_stack.insert(id);

        if let Some(vertex) = self.graph.get_vertex(id) {
            for &neighbor in vertex.out_neighbors() {
                if self.has_cycle(neighbor, visited, recursion_stack) {
                    return true;
                }
            }
        }

        recursion_stack.remove(&id);
        false
    }

    fn sort_dfs(
        &self,
        id: VertexId,
        visited: &mut HashSet<VertexId>,
        post_order: &mut Vec<VertexId>,
    ) {
        visited.insert(id);

        if let Some(vertex) = self.graph.get_vertex(id) {
            for &neighbor in vertex.out_neighbors() {
                if !visited.contains(&neighbor) {
                    self.sort_dfs(neighbor, visited, post_order);
                }
            }
        }

        post_order.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;
    use rand::prelude::*;

    fn add_vertices(graph: &mut Graph, n: usize) -> Vec<VertexId> {
        (0..n).map(|_| graph.add_vertex(Point::default())).collect()
    }

    /// 校验结果是 graph 的合法拓扑顺序
    fn assert_valid_order(graph: &Graph, order: &[VertexId]) {
        assert_eq!(order.len(), graph.vertex_count());
        let position: std::collections::HashMap<VertexId, usize> =
            order.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        for edge in graph.edges() {
            assert!(
                position[&edge.from()] < position[&edge.to()],
                "边 {} -> {} 违反拓扑顺序",
                edge.from(),
                edge.to()
            );
        }
    }

    #[test]
    fn test_chain() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 4);
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[1], v[2]);
        graph.add_edge(v[2], v[3]);

        let order = TopoSort::new(&graph).sort().unwrap();
        assert_eq!(order, vec![v[0], v[1], v[2], v[3]]);
    }

    #[test]
    fn test_diamond() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 4);
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[0], v[2]);
        graph.add_edge(v[1], v[3]);
        graph.add_edge(v[2], v[3]);

        let order = TopoSort::new(&graph).sort().unwrap();
        assert_valid_order(&graph, &order);
        assert_eq!(order.first(), Some(&v[0]));
        assert_eq!(order.last(), Some(&v[3]));
    }

    #[test]
    fn test_cycle_rejected() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 3);
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[1], v[2]);
        graph.add_edge(v[2], v[0]);

        assert_eq!(TopoSort::new(&graph).sort(), Err(Error::CycleDetected));
    }

    #[test]
    fn test_empty_graph_rejected() {
        let graph = Graph::new();
        assert_eq!(TopoSort::new(&graph).sort(), Err(Error::EmptyGraph));
    }

    #[test]
    fn test_disconnected_rejected() {
        let mut graph = Graph::new();
        add_vertices(&mut graph, 2);

        assert_eq!(
            TopoSort::new(&graph).sort(),
            Err(Error::NotWeaklyConnected)
        );
    }

    #[test]
    fn test_single_vertex() {
        let mut graph = Graph::new();
        let v = graph.add_vertex(Point::default());

        assert_eq!(TopoSort::new(&graph).sort().unwrap(), vec![v]);
    }

    #[test]
    fn test_random_dags() {
        // 随机 DAG 上的拓扑顺序性质：只连低序号到高序号的边不会成环
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let n = rng.gen_range(2..10);
            let mut graph = Graph::new();
            let v = add_vertices(&mut graph, n);

            // 保证弱连通的骨架
            for i in 1..n {
                let parent = rng.gen_range(0..i);
                graph.add_edge(v[parent], v[i]);
            }
            // 额外的随机前向边
            for i in 0..n {
                for j in (i + 1)..n {
                    if rng.gen_bool(0.3) {
                        graph.add_edge(v[i], v[j]);
                    }
                }
            }

            let order = TopoSort::new(&graph).sort().unwrap();
            assert_valid_order(&graph, &order);
        }
    }
}
