//! GraphPad CLI 工具
//!
//! 交互式命令行界面

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use graphpad::cli::{execute_command, CommandCompleter, CommandResult};
use graphpad::graph::Graph;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphpad-cli")]
#[command(version = graphpad::VERSION)]
#[command(about = "GraphPad 有向图算法工作台")]
struct Args {
    /// 执行单条命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 逐行执行脚本文件后退出
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut graph = Graph::new();

    // 单条命令模式
    if let Some(command) = args.execute {
        return run_line(&mut graph, &command).map(|_| ());
    }

    // 脚本模式
    if let Some(path) = args.script {
        let content = fs::read_to_string(&path)?;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if run_line(&mut graph, line)? {
                break;
            }
        }
        return Ok(());
    }

    // 交互模式
    println!("GraphPad CLI - 有向图算法工作台");
    println!("================================");
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let config = Config::builder().auto_add_history(true).build();
    let mut editor = Editor::with_config(config)?;
    editor.set_helper(Some(CommandCompleter::new()));

    let history_path = dirs::home_dir().map(|home| home.join(".graphpad_history"));
    if let Some(ref path) = history_path {
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline("graphpad> ") {
            Ok(line) => {
                if run_line(&mut graph, &line)? {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}", format!("读取输入失败: {}", e).red());
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = editor.save_history(path);
    }

    println!("再见！");
    Ok(())
}

/// 执行一行命令并打印结果；返回 true 表示应当退出
fn run_line(graph: &mut Graph, line: &str) -> Result<bool> {
    match execute_command(graph, line) {
        CommandResult::Continue => Ok(false),
        CommandResult::Exit => Ok(true),
        CommandResult::Message(message) => {
            println!("{}", message);
            Ok(false)
        }
        CommandResult::Error(error) => {
            eprintln!("{}", format!("错误: {}", error).red());
            Ok(false)
        }
    }
}
