//! 性能指标收集模块
//!
//! 提供图变更和算法运行的计数统计，由 CLI 层记录

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// 全局指标实例
pub static METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);

/// 系统全局指标
#[derive(Debug)]
pub struct Metrics {
    /// 图操作统计
    graph_stats: GraphStats,
    /// 算法统计
    algorithm_stats: AlgorithmStats,
    /// 启动时间
    start_time: Instant,
}

/// 图操作统计
#[derive(Debug)]
struct GraphStats {
    vertices_added: AtomicU64,
    vertices_removed: AtomicU64,
    edges_added: AtomicU64,
    edges_removed: AtomicU64,
}

/// 算法统计
#[derive(Debug)]
struct AlgorithmStats {
    /// 总运行次数
    runs: AtomicU64,
    /// 校验失败次数
    failures: AtomicU64,
    /// 运行总耗时（微秒）
    total_duration_us: AtomicU64,
}

/// 可导出的指标快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub vertices_added: u64,
    pub vertices_removed: u64,
    pub edges_added: u64,
    pub edges_removed: u64,
    pub algorithm_runs: u64,
    pub algorithm_failures: u64,
    pub avg_algorithm_duration_us: f64,
    pub uptime_seconds: u64,
}

impl Metrics {
    /// 创建新的指标收集器
    pub fn new() -> Self {
        Self {
            graph_stats: GraphStats {
                vertices_added: AtomicU64::new(0),
                vertices_removed: AtomicU64::new(0),
                edges_added: AtomicU64::new(0),
                edges_removed: AtomicU64::new(0),
            },
            algorithm_stats: AlgorithmStats {
                runs: AtomicU64::new(0),
                failures: AtomicU64::new(0),
                total_duration_us: AtomicU64::new(0),
            },
            start_time: Instant::now(),
        }
    }

    pub fn record_vertex_added(&self) {
        self.graph_stats.vertices_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_vertex_removed(&self) {
        self.graph_stats
            .vertices_removed
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_edge_added(&self) {
        self.graph_stats.edges_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_edge_removed(&self) {
        self.graph_stats.edges_removed.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录一次算法运行
    pub fn record_algorithm_run(&self, duration: Duration, success: bool) {
        self.algorithm_stats.runs.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.algorithm_stats.failures.fetch_add(1, Ordering::Relaxed);
        }
        self.algorithm_stats
            .total_duration_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    /// 导出当前快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        let runs = self.algorithm_stats.runs.load(Ordering::Relaxed);
        let total_us = self.algorithm_stats.total_duration_us.load(Ordering::Relaxed);
        let avg = if runs > 0 {
            total_us as f64 / runs as f64
        } else {
            0.0
        };

        MetricsSnapshot {
            vertices_added: self.graph_stats.vertices_added.load(Ordering::Relaxed),
            vertices_removed: self.graph_stats.vertices_removed.load(Ordering::Relaxed),
            edges_added: self.graph_stats.edges_added.load(Ordering::Relaxed),
            edges_removed: self.graph_stats.edges_removed.load(Ordering::Relaxed),
            algorithm_runs: runs,
            algorithm_failures: self.algorithm_stats.failures.load(Ordering::Relaxed),
            avg_algorithm_duration_us: avg,
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_counters() {
        let metrics = Metrics::new();

        metrics.record_vertex_added();
        metrics.record_vertex_added();
        metrics.record_edge_added();
        metrics.record_algorithm_run(Duration::from_micros(100), true);
        metrics.record_algorithm_run(Duration::from_micros(300), false);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.vertices_added, 2);
        assert_eq!(snapshot.edges_added, 1);
        assert_eq!(snapshot.algorithm_runs, 2);
        assert_eq!(snapshot.algorithm_failures, 1);
        assert_eq!(snapshot.avg_algorithm_duration_us, 200.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let metrics = Metrics::new();
        let json = serde_json::to_string(&metrics.snapshot()).unwrap();
        assert!(json.contains("algorithm_runs"));
    }
}
