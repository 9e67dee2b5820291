//! # 单文件替换
//!
//! 读取-替换-条件写回的单文件流程。
//!
//! ## 功能
//! - 以 UTF-8 读取全文，解码失败即该文件失败（不影响批次）
//! - 应用规则集后与原文比较，内容无变化则不写回、不触碰 mtime
//!
//! ## 依赖关系
//! - 被 `commands/apply.rs`, `commands/check.rs` 调用
//! - 使用 `rules/` 的 RuleSet

use crate::error::{RebrandError, Result};
use crate::rules::{ApplyStats, RuleSet};

use std::fs;
use std::path::Path;

/// 单文件处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// 内容有变化，已写回
    Updated,
    /// 内容无变化，未写回
    Unchanged,
}

/// 转换单个文件，仅在内容变化时原地覆盖写回
pub fn transform_file(path: &Path, rules: &RuleSet) -> Result<FileOutcome> {
    let original = fs::read_to_string(path).map_err(|e| RebrandError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let replaced = rules.apply(&original);

    if replaced == original {
        return Ok(FileOutcome::Unchanged);
    }

    fs::write(path, replaced).map_err(|e| RebrandError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(FileOutcome::Updated)
}

/// 干跑：返回各组替换计数，内容无变化时返回 None，不做任何写入
pub fn preview_file(path: &Path, rules: &RuleSet) -> Result<Option<ApplyStats>> {
    let original = fs::read_to_string(path).map_err(|e| RebrandError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let (replaced, stats) = rules.apply_counted(&original);

    if replaced == original {
        Ok(None)
    } else {
        Ok(Some(stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rebrand-{}-{}", std::process::id(), name));
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_updates_file_in_place() {
        let rules = RuleSet::standard().unwrap();
        let path = temp_file("update.html", "<p>渠道诊断</p>".as_bytes());

        let outcome = transform_file(&path, &rules).unwrap();
        assert_eq!(outcome, FileOutcome::Updated);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>Channel Diagnostics</p>");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_noop_file_not_rewritten() {
        let rules = RuleSet::standard().unwrap();
        let path = temp_file("noop.html", b"<p>plain content</p>");
        let mtime_before = fs::metadata(&path).unwrap().modified().unwrap();

        let outcome = transform_file(&path, &rules).unwrap();
        assert_eq!(outcome, FileOutcome::Unchanged);
        let mtime_after = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(mtime_before, mtime_after);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_invalid_utf8_is_per_file_error() {
        let rules = RuleSet::standard().unwrap();
        let path = temp_file("binary.html", &[0xff, 0xfe, 0x00, 0x48]);

        let err = transform_file(&path, &rules).unwrap_err();
        assert!(matches!(err, RebrandError::FileReadError { .. }));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_preview_does_not_write() {
        let rules = RuleSet::standard().unwrap();
        let path = temp_file("preview.html", "<p>GEO系统</p>".as_bytes());

        let stats = preview_file(&path, &rules).unwrap().unwrap();
        assert_eq!(stats.general, 1);
        // 干跑后文件内容保持原样
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>GEO系统</p>");

        fs::remove_file(&path).ok();
    }
}
