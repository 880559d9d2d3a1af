//! 结果打印器
//!
//! 把算法结果和图内容渲染成表格或文本

use crate::algorithm::{DegreeReport, MaxFlow, ShortestPath};
use crate::graph::{Graph, VertexId};
use crate::metrics::MetricsSnapshot;
use prettytable::{format, row, Cell, Row, Table};

/// 结果打印器
#[derive(Default)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    /// 顶点列表表格
    pub fn format_vertex_list(&self, graph: &Graph) -> String {
        let mut table = Self::new_table();
        table.set_titles(row!["ID", "X", "Y", "出度", "入度"]);
        for vertex in graph.vertices() {
            table.add_row(Row::new(vec![
                Cell::new(&vertex.id().to_string()),
                Cell::new(&vertex.position().x.to_string()),
                Cell::new(&vertex.position().y.to_string()),
                Cell::new(&vertex.out_degree().to_string()),
                Cell::new(&vertex.in_degree().to_string()),
            ]));
        }
        format!("{}{} 个顶点\n", table, graph.vertex_count())
    }

    /// 边列表表格
    pub fn format_edge_list(&self, graph: &Graph) -> String {
        let mut table = Self::new_table();
        table.set_titles(row!["From", "To", "权重"]);
        for edge in graph.edges() {
            table.add_row(Row::new(vec![
                Cell::new(&edge.from().to_string()),
                Cell::new(&edge.to().to_string()),
                Cell::new(&edge.weight().to_string()),
            ]));
        }
        format!("{}{} 条边\n", table, graph.edge_count())
    }

    /// 顶点序列（拓扑序、欧拉回路等）
    pub fn format_order(&self, vertices: &[VertexId]) -> String {
        vertices
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// 最短路径结果
    pub fn format_shortest_path(&self, path: &ShortestPath) -> String {
        format!(
            "距离: {}\n路径: {}\n",
            path.distance,
            self.format_order(&path.vertices)
        )
    }

    /// 最大流结果
    pub fn format_max_flow(&self, result: &MaxFlow) -> String {
        let mut output = format!("最大流: {}\n", result.value);

        if !result.flow.is_empty() {
            let mut table = Self::new_table();
            table.set_titles(row!["From", "To", "流量"]);
            let mut assignments: Vec<_> = result.flow.iter().collect();
            assignments.sort();
            for (&(from, to), &amount) in assignments {
                table.add_row(Row::new(vec![
                    Cell::new(&from.to_string()),
                    Cell::new(&to.to_string()),
                    Cell::new(&amount.to_string()),
                ]));
            }
            output.push_str(&table.to_string());
        }

        let mut cut: Vec<_> = result.source_side.iter().collect();
        cut.sort();
        let cut: Vec<String> = cut.iter().map(|id| id.to_string()).collect();
        output.push_str(&format!("最小割源侧: {{{}}}\n", cut.join(", ")));
        output
    }

    /// 度数报告表格
    pub fn format_degree_report(&self, report: &DegreeReport) -> String {
        let mut table = Self::new_table();
        table.set_titles(row!["ID", "入度", "出度", "总度数"]);
        for entry in &report.entries {
            table.add_row(Row::new(vec![
                Cell::new(&entry.id.to_string()),
                Cell::new(&entry.in_degree.to_string()),
                Cell::new(&entry.out_degree.to_string()),
                Cell::new(&entry.total.to_string()),
            ]));
        }
        table.to_string()
    }

    /// 强连通分量列表
    pub fn format_components(&self, components: &[Vec<VertexId>]) -> String {
        let mut output = format!("{} 个强连通分量:\n", components.len());
        for (i, component) in components.iter().enumerate() {
            let ids: Vec<String> = component.iter().map(|id| id.to_string()).collect();
            output.push_str(&format!("  {}: {{{}}}\n", i + 1, ids.join(", ")));
        }
        output
    }

    /// 统计信息表格
    pub fn format_stats(&self, graph: &Graph, snapshot: &MetricsSnapshot) -> String {
        let mut table = Self::new_table();
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", graph.vertex_count().to_string()]);
        table.add_row(row!["Edge Count", graph.edge_count().to_string()]);
        table.add_row(row!["Vertices Added", snapshot.vertices_added.to_string()]);
        table.add_row(row![
            "Vertices Removed",
            snapshot.vertices_removed.to_string()
        ]);
        table.add_row(row!["Edges Added", snapshot.edges_added.to_string()]);
        table.add_row(row!["Edges Removed", snapshot.edges_removed.to_string()]);
        table.add_row(row!["Algorithm Runs", snapshot.algorithm_runs.to_string()]);
        table.add_row(row![
            "Algorithm Failures",
            snapshot.algorithm_failures.to_string()
        ]);
        table.add_row(row![
            "Avg Algorithm Time (us)",
            format!("{:.1}", snapshot.avg_algorithm_duration_us)
        ]);
        table.add_row(row!["Uptime (s)", snapshot.uptime_seconds.to_string()]);
        table.to_string()
    }

    fn new_table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table
    }
}
