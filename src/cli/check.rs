//! # check 子命令 CLI 定义
//!
//! 干跑模式：列出将被修改的文件及各规则组替换数量，不写任何文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/check.rs`

use clap::Args;
use std::path::PathBuf;

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory containing the HTML files to inspect
    pub input: PathBuf,

    /// Glob pattern for input filenames
    #[arg(short, long, default_value = "*.html")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,
}
