//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 命令列表
const COMMANDS: &[&str] = &[
    "help",
    "quit",
    "exit",
    "stats",
    "vertices",
    "edges",
    "show",
    "addv",
    "movev",
    "rmv",
    "adde",
    "rme",
    "clear",
    "topo",
    "euler",
    "eulerpath",
    "dijkstra",
    "path",
    "maxflow",
    "flow",
    "scc",
    "degrees",
];

/// GraphPad CLI 补全器
///
/// 只补全行首的命令词，后续参数都是顶点 ID 或坐标，不做补全。
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];

        // 已经在输入参数
        if line_to_cursor.contains(' ') {
            return Ok((pos, vec![]));
        }

        let word = line_to_cursor.to_lowercase();
        let completions: Vec<Pair> = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(&word))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();

        Ok((0, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
