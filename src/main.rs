//! # Rebrand - Dymesty AI Glasses 品牌迁移工具
//!
//! 将 leapgeo 项目的 HTML 内容批量迁移为 Dymesty AI Glasses 英文品牌内容。
//!
//! ## 子命令
//! - `apply` - 对目录内的 HTML 文件执行替换并原地写回
//! - `check` - 干跑模式，列出将被修改的文件及各规则组的替换数量
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── rules/     (替换规则表与应用逻辑)
//!   │     ├── batch/     (文件收集与批量执行)
//!   │     └── transform.rs (单文件读取-替换-写回)
//!   ├── report.rs   (CSV 结果导出)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod report;
mod rules;
mod transform;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
