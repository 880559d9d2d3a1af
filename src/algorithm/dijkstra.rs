//! Dijkstra 最短路径
//!
//! 非负整数权重上的标号法。候选顶点放在优先队列里，
//! 优先级取 (暂定距离, 顶点 ID) 的逆序，距离相同时固定取 ID 较小者。

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// 最短路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// 总距离
    pub distance: u64,
    /// 从起点到终点的顶点序列
    pub vertices: Vec<VertexId>,
}

/// Dijkstra 最短路径算法
pub struct Dijkstra<'a> {
    graph: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算从 start 到 end 的最短路径
    ///
    /// 两个 ID 必须都属于本图。start == end 时返回距离 0 的平凡结果；
    /// 终点不可达时返回 [`Error::NoPath`]。只有可达顶点会进入队列，
    /// 队列耗尽即剩余顶点全部不可达。
    pub fn shortest_path(&self, start: VertexId, end: VertexId) -> Result<ShortestPath> {
        if !self.graph.contains_vertex(start) {
            return Err(Error::VertexNotFound(start.as_u64()));
        }
        if !self.graph.contains_vertex(end) {
            return Err(Error::VertexNotFound(end.as_u64()));
        }
        if start == end {
            return Ok(ShortestPath {
                distance: 0,
                vertices: vec![start],
            });
        }

        let mut distances: HashMap<VertexId, u64> = HashMap::new();
        let mut previous: HashMap<VertexId, VertexId> = HashMap::new();
        let mut settled: HashSet<VertexId> = HashSet::new();
        let mut frontier: PriorityQueue<VertexId, Reverse<(u64, u64)>> = PriorityQueue::new();

        distances.insert(start, 0);
        frontier.push(start, Reverse((0, start.as_u64())));

        while let Some((current, Reverse((distance, _)))) = frontier.pop() {
            if !settled.insert(current) {
                continue;
            }
            if current == end {
                break;
            }

            if let Some(vertex) = self.graph.get_vertex(current) {
                for &neighbor in vertex.out_neighbors() {
                    if settled.contains(&neighbor) {
                        continue;
                    }
                    if let Some(edge) = self.graph.get_edge(current, neighbor) {
                        let alternative = distance.saturating_add(edge.weight());
                        let improved = distances
                            .get(&neighbor)
                            .map_or(true, |&known| alternative < known);
                        if improved {
                            distances.insert(neighbor, alternative);
                            previous.insert(neighbor, current);
                            frontier
                                .push_increase(neighbor, Reverse((alternative, neighbor.as_u64())));
                        }
                    }
                }
            }
        }

        let distance = match distances.get(&end) {
            Some(&d) => d,
            None => {
                return Err(Error::NoPath {
                    from: start.as_u64(),
                    to: end.as_u64(),
                })
            }
        };

        // 沿前驱链从终点回溯
        let mut vertices = vec![end];
        let mut current = end;
        while current != start {
            match previous.get(&current) {
                Some(&prev) => {
                    vertices.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        vertices.reverse();

        Ok(ShortestPath { distance, vertices })
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
    fn test_weighted_shortest_path() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 4);
        graph.add_edge_with_weight(v[0], v[1], 4);
        graph.add_edge_with_weight(v[0], v[2], 1);
        graph.add_edge_with_weight(v[2], v[1], 1);
        graph.add_edge_with_weight(v[1], v[3], 1);

        let path = Dijkstra::new(&graph).shortest_path(v[0], v[3]).unwrap();
        assert_eq!(path.distance, 3);
        assert_eq!(path.vertices, vec![v[0], v[2], v[1], v[3]]);
    }

    #[test]
    fn test_path_weights_sum_to_distance() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 5);
        graph.add_edge_with_weight(v[0], v[1], 2);
        graph.add_edge_with_weight(v[1], v[2], 3);
        graph.add_edge_with_weight(v[0], v[3], 1);
        graph.add_edge_with_weight(v[3], v[4], 1);
        graph.add_edge_with_weight(v[4], v[2], 2);

        let path = Dijkstra::new(&graph).shortest_path(v[0], v[2]).unwrap();

        let total: u64 = path
            .vertices
            .windows(2)
            .map(|pair| graph.get_edge(pair[0], pair[1]).map(|e| e.weight()).unwrap())
            .sum();
        assert_eq!(total, path.distance);
        assert_eq!(path.distance, 4);
    }

    #[test]
    fn test_same_vertex_zero_distance() {
        let mut graph = Graph::new();
        let v = graph.add_vertex(Point::default());

        let path = Dijkstra::new(&graph).shortest_path(v, v).unwrap();
        assert_eq!(path.distance, 0);
        assert_eq!(path.vertices, vec![v]);
    }

    #[test]
    fn test_unreachable() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 2);
        // 只有反向边
        graph.add_edge(v[1], v[0]);

        assert_eq!(
            Dijkstra::new(&graph).shortest_path(v[0], v[1]),
            Err(Error::NoPath { from: 1, to: 2 })
        );
    }

    #[test]
    fn test_unknown_vertex() {
        let mut graph = Graph::new();
        let v = graph.add_vertex(Point::default());

        assert_eq!(
            Dijkstra::new(&graph).shortest_path(v, VertexId::new(42)),
            Err(Error::VertexNotFound(42))
        );
        assert_eq!(
            Dijkstra::new(&graph).shortest_path(VertexId::new(42), v),
            Err(Error::VertexNotFound(42))
        );
    }

    #[test]
    fn test_tie_break_prefers_lower_id() {
        let mut graph = Graph::new();
        let v = add_vertices(&mut graph, 4);
        // 两条等长路径 1->2->4 和 1->3->4，确定性地选经过 2 的那条
        graph.add_edge_with_weight(v[0], v[1], 1);
        graph.add_edge_with_weight(v[0], v[2], 1);
        graph.add_edge_with_weight(v[1], v[3], 1);
        graph.add_edge_with_weight(v[2], v[3], 1);

        let path = Dijkstra::new(&graph).shortest_path(v[0], v[3]).unwrap();
        assert_eq!(path.distance, 2);
        assert_eq!(path.vertices, vec![v[0], v[1], v[3]]);
    }
}
