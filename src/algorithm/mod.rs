//! 图算法模块
//!
//! 拓扑排序、连通性、欧拉回路/路径、最短路径、最大流与度数报告。
//! 所有算法都是图快照上的只读操作，先做前置校验再执行，
//! 遍历顺序固定：根按顶点插入顺序，邻居按 ID 升序。

mod connectivity;
mod degree;
mod dijkstra;
mod eulerian;
mod max_flow;
mod toposort;

pub use connectivity::{is_weakly_connected, Kosaraju};
pub use degree::{degree_report, DegreeEntry, DegreeReport};
pub use dijkstra::{Dijkstra, ShortestPath};
pub use eulerian::Eulerian;
pub use max_flow::{EdmondsKarp, MaxFlow};
pub use toposort::TopoSort;
