//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `rules/`, `batch/`, `utils/`
//! - 子模块: apply, check

pub mod apply;
pub mod check;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Apply(args) => apply::execute(args),
        Commands::Check(args) => check::execute(args),
    }
}
