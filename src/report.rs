//! # 结果报告导出
//!
//! 将批处理的逐文件结果导出为 CSV。退出码始终为 0 的设计下，
//! 脚本可通过该报告检测部分失败。
//!
//! ## 依赖关系
//! - 被 `commands/apply.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件，`serde` 序列化记录

use crate::batch::runner::ProcessResult;
use crate::error::{RebrandError, Result};

use serde::Serialize;
use std::path::Path;

/// CSV 报告中的一行
#[derive(Debug, Serialize)]
struct ReportRecord<'a> {
    file: &'a str,
    outcome: &'static str,
    detail: &'a str,
}

impl<'a> ReportRecord<'a> {
    fn from_result(result: &'a ProcessResult) -> Self {
        match result {
            ProcessResult::Updated(path) => Self {
                file: path,
                outcome: "updated",
                detail: "",
            },
            ProcessResult::Unchanged(path) => Self {
                file: path,
                outcome: "unchanged",
                detail: "",
            },
            ProcessResult::Skipped(path) => Self {
                file: path,
                outcome: "skipped",
                detail: "already processed",
            },
            ProcessResult::Failed(path, err) => Self {
                file: path,
                outcome: "failed",
                detail: err,
            },
        }
    }
}

/// 写出逐文件结果报告
pub fn write_report(results: &[ProcessResult], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for result in results {
        wtr.serialize(ReportRecord::from_result(result))?;
    }

    wtr.flush().map_err(|e| RebrandError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_report_rows() {
        let results = vec![
            ProcessResult::Updated("a.html".into()),
            ProcessResult::Skipped("login.html".into()),
            ProcessResult::Failed("c.html".into(), "invalid utf-8".into()),
        ];
        let path =
            std::env::temp_dir().join(format!("rebrand-report-{}.csv", std::process::id()));

        write_report(&results, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("file,outcome,detail"));
        assert_eq!(lines.next(), Some("a.html,updated,"));
        assert_eq!(lines.next(), Some("login.html,skipped,already processed"));
        assert_eq!(lines.next(), Some("c.html,failed,invalid utf-8"));

        fs::remove_file(&path).ok();
    }
}
