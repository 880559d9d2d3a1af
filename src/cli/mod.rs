//! 交互式命令行界面
//!
//! 命令解析、结果表格输出和 Tab 补全

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{execute_command, CommandResult};
pub use completer::CommandCompleter;
pub use printer::Printer;
