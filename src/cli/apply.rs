//! # apply 子命令 CLI 定义
//!
//! 对目录内 HTML 文件执行替换并原地写回
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/apply.rs`

use clap::Args;
use std::path::PathBuf;

/// apply 子命令参数
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Directory containing the HTML files to rebrand
    pub input: PathBuf,

    /// Glob pattern for input filenames
    #[arg(short, long, default_value = "*.html")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (1 = sequential, 0 = auto)
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Write a per-file outcome report to this CSV path
    #[arg(long)]
    pub report: Option<PathBuf>,
}
