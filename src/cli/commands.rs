//! 控制台命令处理
//!
//! 解析交互式命令并在图上执行对应操作

use std::time::Instant;

use crate::algorithm::{degree_report, Dijkstra, EdmondsKarp, Eulerian, Kosaraju, TopoSort};
use crate::cli::printer::Printer;
use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::metrics::METRICS;
use crate::types::Point;

/// 控制台命令执行结果
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 解析并执行一条命令
pub fn execute_command(graph: &mut Graph, input: &str) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return CommandResult::Continue;
    }

    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let args = parts.get(1).copied().unwrap_or("").trim();
    let printer = Printer::new();

    match cmd.as_str() {
        "help" | "h" | "?" => CommandResult::Message(help_text()),

        "quit" | "exit" | "q" => CommandResult::Exit,

        "stats" | "info" => {
            let snapshot = METRICS.snapshot();
            if args == "json" {
                match serde_json::to_string_pretty(&snapshot) {
                    Ok(json) => CommandResult::Message(json),
                    Err(e) => CommandResult::Error(format!("序列化失败: {}", e)),
                }
            } else {
                CommandResult::Message(printer.format_stats(graph, &snapshot))
            }
        }

        "vertices" | "show" => CommandResult::Message(printer.format_vertex_list(graph)),

        "edges" => CommandResult::Message(printer.format_edge_list(graph)),

        "addv" => {
            let coords: Vec<&str> = args.split_whitespace().collect();
            let (x, y) = match coords.as_slice() {
                [] => (0, 0),
                [x, y] => match (x.parse::<i32>(), y.parse::<i32>()) {
                    (Ok(x), Ok(y)) => (x, y),
                    _ => return CommandResult::Error("无效的坐标".to_string()),
                },
                _ => return CommandResult::Error("用法: addv [x y]".to_string()),
            };
            let id = graph.add_vertex(Point::new(x, y));
            METRICS.record_vertex_added();
            CommandResult::Message(format!("已添加顶点 {}", id))
        }

        "movev" => {
            let parts: Vec<&str> = args.split_whitespace().collect();
            match parts.as_slice() {
                [id, x, y] => {
                    match (id.parse::<u64>(), x.parse::<i32>(), y.parse::<i32>()) {
                        (Ok(id), Ok(x), Ok(y)) => {
                            if graph.move_vertex(VertexId::new(id), Point::new(x, y)) {
                                CommandResult::Message(format!("顶点 {} 已移动到 ({}, {})", id, x, y))
                            } else {
                                CommandResult::Error(format!("顶点 {} 不存在", id))
                            }
                        }
                        _ => CommandResult::Error("无效的参数".to_string()),
                    }
                }
                _ => CommandResult::Error("用法: movev <ID> <x> <y>".to_string()),
            }
        }

        "rmv" => match args.parse::<u64>() {
            Ok(id) => {
                if graph.remove_vertex(VertexId::new(id)) {
                    METRICS.record_vertex_removed();
                    CommandResult::Message(format!("已删除顶点 {} 及其关联边", id))
                } else {
                    CommandResult::Error(format!("顶点 {} 不存在", id))
                }
            }
            Err(_) => CommandResult::Error("用法: rmv <ID>".to_string()),
        },

        "adde" => {
            let parts: Vec<&str> = args.split_whitespace().collect();
            let (from, to, weight) = match parts.as_slice() {
                [from, to] => match (from.parse::<u64>(), to.parse::<u64>()) {
                    (Ok(f), Ok(t)) => (f, t, None),
                    _ => return CommandResult::Error("无效的顶点 ID".to_string()),
                },
                [from, to, weight] => {
                    match (from.parse::<u64>(), to.parse::<u64>(), weight.parse::<u64>()) {
                        (Ok(f), Ok(t), Ok(w)) => (f, t, Some(w)),
                        _ => return CommandResult::Error("无效的参数".to_string()),
                    }
                }
                _ => return CommandResult::Error("用法: adde <起点> <终点> [权重]".to_string()),
            };

            let from = VertexId::new(from);
            let to = VertexId::new(to);
            let added = match weight {
                Some(w) => graph.add_edge_with_weight(from, to, w),
                None => graph.add_edge(from, to),
            };
            if added {
                METRICS.record_edge_added();
                CommandResult::Message(format!("已添加边 {} -> {}", from, to))
            } else {
                // 自环、重复边或端点不存在都会被静默忽略
                CommandResult::Error(format!("无法添加边 {} -> {}", from, to))
            }
        }

        "rme" => {
            let parts: Vec<&str> = args.split_whitespace().collect();
            match parts.as_slice() {
                [from, to] => match (from.parse::<u64>(), to.parse::<u64>()) {
                    (Ok(f), Ok(t)) => {
                        if graph.remove_edge(VertexId::new(f), VertexId::new(t)) {
                            METRICS.record_edge_removed();
                            CommandResult::Message(format!("已删除边 {} -> {}", f, t))
                        } else {
                            CommandResult::Error(format!("边 {} -> {} 不存在", f, t))
                        }
                    }
                    _ => CommandResult::Error("无效的顶点 ID".to_string()),
                },
                _ => CommandResult::Error("用法: rme <起点> <终点>".to_string()),
            }
        }

        "clear" => {
            graph.clear();
            CommandResult::Message("图已清空，顶点编号重新从 1 开始".to_string())
        }

        "topo" => run_algorithm(|| {
            let order = TopoSort::new(graph).sort()?;
            Ok(format!("拓扑排序: {}", printer.format_order(&order)))
        }),

        "euler" => run_algorithm(|| {
            let circuit = Eulerian::new(graph).circuit()?;
            Ok(format!("欧拉回路: {}", printer.format_order(&circuit)))
        }),

        "eulerpath" => run_algorithm(|| {
            let path = Eulerian::new(graph).path()?;
            Ok(format!("欧拉路径: {}", printer.format_order(&path)))
        }),

        "dijkstra" | "path" => {
            let parts: Vec<&str> = args.split_whitespace().collect();
            match parse_id_pair(&parts) {
                Some((start, end)) => run_algorithm(|| {
                    let path = Dijkstra::new(graph).shortest_path(start, end)?;
                    Ok(printer.format_shortest_path(&path))
                }),
                None => CommandResult::Error("用法: dijkstra <起点> <终点>".to_string()),
            }
        }

        "maxflow" | "flow" => {
            let parts: Vec<&str> = args.split_whitespace().collect();
            match parse_id_pair(&parts) {
                Some((source, sink)) => run_algorithm(|| {
                    let result = EdmondsKarp::new(graph).max_flow(source, sink)?;
                    Ok(printer.format_max_flow(&result))
                }),
                None => CommandResult::Error("用法: maxflow <源点> <汇点>".to_string()),
            }
        }

        "scc" => run_algorithm(|| {
            let components = Kosaraju::new(graph).components()?;
            Ok(printer.format_components(&components))
        }),

        "degrees" | "degree" => run_algorithm(|| {
            let report = degree_report(graph)?;
            Ok(printer.format_degree_report(&report))
        }),

        _ => CommandResult::Error(format!("未知命令: {}。输入 'help' 查看帮助。", cmd)),
    }
}

/// 运行算法并记录指标
fn run_algorithm<F>(run: F) -> CommandResult
where
    F: FnOnce() -> Result<String>,
{
    let start = Instant::now();
    let outcome = run();
    METRICS.record_algorithm_run(start.elapsed(), outcome.is_ok());

    match outcome {
        Ok(message) => CommandResult::Message(message),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn parse_id_pair(parts: &[&str]) -> Option<(VertexId, VertexId)> {
    match parts {
        [a, b] => match (a.parse::<u64>(), b.parse::<u64>()) {
            (Ok(a), Ok(b)) => Some((VertexId::new(a), VertexId::new(b))),
            _ => None,
        },
        _ => None,
    }
}

fn help_text() -> String {
    r#"
═══════════════════════════════════════════════════════════════
                   GraphPad CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?             显示帮助
  quit, exit, q          退出程序
  stats [json]           显示统计信息（json 输出指标快照）

图编辑:
  addv [x y]             添加顶点（可带画布坐标）
  movev <ID> <x> <y>     移动顶点
  rmv <ID>               删除顶点及其关联边
  adde <起点> <终点> [权重]
                         添加有向边（默认权重 1）
  rme <起点> <终点>      删除边
  clear                  清空图，顶点编号重置
  vertices, show         列出所有顶点
  edges                  列出所有边

算法:
  topo                   拓扑排序（要求弱连通无环）
  euler                  欧拉回路
  eulerpath              欧拉路径
  dijkstra <起点> <终点> 最短路径
                         示例: dijkstra 1 5
  maxflow <源点> <汇点>  最大流（Edmonds-Karp）
                         示例: maxflow 1 5
  scc                    强连通分量（Kosaraju）
  degrees                度数报告

═══════════════════════════════════════════════════════════════
"#
    .to_string()
}
