//! # 批量处理模块
//!
//! 提供统一的文件收集与批量执行能力。
//!
//! ## 功能
//! - 目录扫描与 glob 文件名过滤
//! - 固定排除名单（已人工处理的文件）
//! - 顺序执行（默认）或 rayon 并行执行
//! - 进度反馈与结果统计
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `walkdir`, `glob` 收集文件
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
