//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `apply`: 执行替换并原地写回
//! - `check`: 干跑模式，列出将被修改的文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: apply, check

pub mod apply;
pub mod check;

use clap::{Parser, Subcommand};

/// rebrand - Dymesty AI Glasses 品牌迁移工具
#[derive(Parser)]
#[command(name = "rebrand")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch rebranding transformer for Dymesty AI Glasses HTML content", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Apply the rebranding rules to HTML files in place
    Apply(apply::ApplyArgs),

    /// Dry run: list files that would change, with per-group counts
    Check(check::CheckArgs),
}
