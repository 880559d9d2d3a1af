//! 错误类型定义
//!
//! 所有算法入口先做前置校验，校验失败返回对应错误而不是执行算法。
//! 调用方直接展示错误消息，无需额外处理。

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("图为空: 没有可处理的顶点")]
    EmptyGraph,

    #[error("图不是弱连通的: 忽略边方向后仍存在互不可达的顶点")]
    NotWeaklyConnected,

    #[error("图中存在有向环: 无法进行拓扑排序")]
    CycleDetected,

    #[error("顶点 {0} 的入度与出度不相等: 不存在欧拉回路")]
    DegreeMismatch(u64),

    #[error("度数条件不满足: 不存在欧拉路径 ({0})")]
    UnbalancedDegrees(String),

    #[error("图中没有边: 没有可遍历的内容")]
    NoEdges,

    #[error("顶点不存在: {0}")]
    VertexNotFound(u64),

    #[error("不存在从顶点 {from} 到顶点 {to} 的路径")]
    NoPath { from: u64, to: u64 },
}
