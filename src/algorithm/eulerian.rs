//! 欧拉回路与欧拉路径
//!
//! 迭代版 Hierholzer 算法：维护每个顶点尚未消耗的出边池，
//! 栈顶顶点还有未用出边就消耗并压栈，否则弹出记入回路，最后整体逆序。

use super::connectivity::is_weakly_connected;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use std::collections::{HashMap, VecDeque};

/// 欧拉回路/路径算法
pub struct Eulerian<'a> {
    graph: &'a Graph,
}

impl<'a> Eulerian<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 欧拉回路：使用每条边恰好一次并回到起点的闭合走法
    ///
    /// 前置条件：图非空、弱连通、每个顶点入度等于出度。
    /// 起点取第一个出度大于 0 的顶点（插入顺序）。
    pub fn circuit(&self) -> Result<Vec<VertexId>> {
        if self.graph.vertex_count() == 0 {
            return Err(Error::EmptyGraph);
        }
        if !is_weakly_connected(self.graph) {
            return Err(Error::NotWeaklyConnected);
        }
        for vertex in self.graph.vertices() {
            if vertex.in_degree() != vertex.out_degree() {
                return Err(Error::DegreeMismatch(vertex.id().as_u64()));
            }
        }

        let start = self
            .graph
            .vertices()
            .find(|v| v.out_degree() > 0)
            .map(|v| v.id())
            .ok_or(Error::NoEdges)?;

        Ok(self.hierholzer(start))
    }

    /// 欧拉路径：使用每条边恰好一次的走法，起止点可以不同
    ///
    /// 前置条件：每个顶点 |出度 - 入度| <= 1；至多一个顶点出度多 1
    /// （起点）、至多一个顶点入度多 1（终点），且两者成对出现。
    /// 全部平衡时退化为欧拉回路。
    pub fn path(&self) -> Result<Vec<VertexId>> {
        if self.graph.vertex_count() == 0 {
            return Err(Error::EmptyGraph);
        }
        if !is_weakly_connected(self.graph) {
            return Err(Error::NotWeaklyConnected);
        }

        let mut start_candidates = Vec::new();
        let mut end_candidates = Vec::new();
        for vertex in self.graph.vertices() {
            let difference = vertex.out_degree() as i64 - vertex.in_degree() as i64;
            match difference {
                0 => {}
                1 => start_candidates.push(vertex.id()),
                -1 => end_candidates.push(vertex.id()),
                _ => {
                    return Err(Error::UnbalancedDegrees(format!(
                        "顶点 {} 的出入度差为 {}",
                        vertex.id(),
                        difference
                    )))
                }
            }
        }

        let start = match (start_candidates.len(), end_candidates.len()) {
            // 全部平衡：从任意出度大于 0 的顶点开始的回路
            (0, 0) => self
                .graph
                .vertices()
                .find(|v| v.out_degree() > 0)
                .map(|v| v.id())
                .ok_or(Error::NoEdges)?,
            (1, 1) => start_candidates[0],
            (starts, ends) => {
                return Err(Error::UnbalancedDegrees(format!(
                    "起点候选 {} 个, 终点候选 {} 个",
                    starts, ends
                )))
            }
        };

        Ok(self.hierholzer(start))
    }

    /// 迭代消耗边的 Hierholzer 过程
    fn hierholzer(&self, start: VertexId) -> Vec<VertexId> {
        // 每个顶点尚未消耗的出边池（ID 升序）
        let mut available: HashMap<VertexId, VecDeque<VertexId>> = self
            .graph
            .vertices()
            .map(|v| (v.id(), v.out_neighbors().iter().copied().collect()))
            .collect();

        let mut stack = vec![start];
        let mut trail = Vec::with_capacity(self.graph.edge_count() + 1);

        while let Some(&current) = stack.last() {
            let next = available
                .get_mut(&current)
                .and_then(|pool| pool.pop_front());
            match next {
                Some(neighbor) => stack.push(neighbor),
                None => {
                    trail.push(current);
                    stack.pop();
                }
            }
        }

        trail.reverse();
        trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;
    use std::collections::HashSet;

    fn add_vertices(graph: &mut Graph, n: usize) -> Vec<VertexId> {
        (0..n).map(|_| graph.add_vertex(Point::default())).collect()
    }

    /// 校验走法把每条边恰好用一次
    fn assert_uses_every_edge_once(graph: &Graph, trail: &[VertexId]) {
        assert_eq!(trail.len(), graph.edge_count() + 1);
        let mut used = HashSet::new();
        for pair in trail.windows(2) {
            assert!(graph.are_connected(pair[0], pair[1]));
            assert!(used.insert((pair[0], pair[1])), "边被重复使用");
        }
        assert_eq!(used.len(), graph.edge_count());
    }

    #[test]
    fn test_circuit_square() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 4);
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[1], v[2]);
        graph.add_edge(v[2], v[3]);
        graph.add_edge(v[3], v[0]);

        let circuit = Eulerian::new(&graph).circuit().unwrap();
        assert_eq!(circuit, vec![v[0], v[1], v[2], v[3], v[0]]);
        assert_uses_every_edge_once(&graph, &circuit);
    }

    #[test]
    fn test_circuit_with_subcycle() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 4);
        // 大环 1-2-3-1 套小环 2-4-2
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[1], v[2]);
        graph.add_edge(v[2], v[0]);
        graph.add_edge(v[1], v[3]);
        graph.add_edge(v[3], v[1]);

        let circuit = Eulerian::new(&graph).circuit().unwrap();
        assert_uses_every_edge_once(&graph, &circuit);
        assert_eq!(circuit.first(), circuit.last());
    }

    #[test]
    fn test_circuit_degree_mismatch() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 3);
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[1], v[2]);

        assert_eq!(
            Eulerian::new(&graph).circuit(),
            Err(Error::DegreeMismatch(v[0].as_u64()))
        );
    }

    #[test]
    fn test_circuit_disconnected() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 4);
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[1], v[0]);
        graph.add_edge(v[2], v[3]);
        graph.add_edge(v[3], v[2]);

        assert_eq!(
            Eulerian::new(&graph).circuit(),
            Err(Error::NotWeaklyConnected)
        );
    }

    #[test]
    fn test_circuit_no_edges() {
        let mut graph = Graph::new();
        graph.add_vertex(Point::default());

        assert_eq!(Eulerian::new(&graph).circuit(), Err(Error::NoEdges));
    }

    #[test]
    fn test_path_endpoints() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 3);
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[1], v[2]);

        let path = Eulerian::new(&graph).path().unwrap();
        assert_eq!(path, vec![v[0], v[1], v[2]]);
        assert_uses_every_edge_once(&graph, &path);
    }

    #[test]
    fn test_path_with_detour() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 4);
        // 1 -> 2 -> 3 -> 2 -> 4：起点 1 出度多 1，终点 4 入度多 1
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[1], v[2]);
        graph.add_edge(v[2], v[1]);
        graph.add_edge(v[1], v[3]);

        let path = Eulerian::new(&graph).path().unwrap();
        assert_uses_every_edge_once(&graph, &path);
        assert_eq!(path.first(), Some(&v[0]));
        assert_eq!(path.last(), Some(&v[3]));
    }

    #[test]
    fn test_path_degenerates_to_circuit() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 3);
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[1], v[2]);
        graph.add_edge(v[2], v[0]);

        let path = Eulerian::new(&graph).path().unwrap();
        assert_uses_every_edge_once(&graph, &path);
        assert_eq!(path.first(), path.last());
    }

    #[test]
    fn test_path_too_many_endpoints() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 5);
        // 顶点 1、2 出度多 1，顶点 4、5 入度多 1，顶点 3 平衡
        graph.add_edge(v[0], v[2]);
        graph.add_edge(v[1], v[2]);
        graph.add_edge(v[2], v[3]);
        graph.add_edge(v[2], v[4]);

        let result = Eulerian::new(&graph).path();
        assert!(matches!(result, Err(Error::UnbalancedDegrees(_))));
    }

    #[test]
    fn test_path_large_imbalance() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 3);
        // 顶点 1 出度 2 入度 0
        graph.add_edge(v[0], v[1]);
        graph.add_edge(v[0], v[2]);

        let result = Eulerian::new(&graph).path();
        assert!(matches!(result, Err(Error::UnbalancedDegrees(_))));
    }
}
