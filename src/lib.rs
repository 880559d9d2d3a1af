//! GraphPad - 有向加权图算法引擎
//!
//! 为交互式图编辑器设计的图引擎，支持：
//! - 顶点/边数据模型与出入邻接簿记
//! - 经典图算法（拓扑排序、欧拉回路/路径、Dijkstra、最大流、强连通分量）
//! - 交互式命令行界面
//!
//! 引擎本身不做任何 I/O：算法读取图的快照，返回结构化结果或校验错误，
//! 由调用方决定如何展示。

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    degree_report, is_weakly_connected, DegreeEntry, DegreeReport, Dijkstra, EdmondsKarp,
    Eulerian, Kosaraju, MaxFlow, ShortestPath, TopoSort,
};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex, VertexId, DEFAULT_WEIGHT};
pub use types::Point;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
