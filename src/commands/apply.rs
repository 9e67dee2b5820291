//! # apply 命令实现
//!
//! 对目录内的 HTML 文件执行品牌迁移替换并原地写回。
//!
//! ## 功能
//! - 收集匹配文件，排除名单内的文件上报为跳过
//! - 逐文件应用规则集，仅在内容变化时写回
//! - 单文件失败不中断批次，退出码不受单文件失败影响
//! - 可选导出逐文件 CSV 结果报告
//!
//! ## 依赖关系
//! - 使用 `cli/apply.rs` 定义的参数
//! - 使用 `rules/`, `transform.rs`, `batch/`
//! - 使用 `utils/output.rs`, `report.rs`

use crate::batch::{collector, runner::ProcessResult, BatchRunner, FileCollector};
use crate::cli::apply::ApplyArgs;
use crate::error::Result;
use crate::report;
use crate::rules::RuleSet;
use crate::transform::{self, FileOutcome};
use crate::utils::output;

/// 执行 apply 命令
pub fn execute(args: ApplyArgs) -> Result<()> {
    output::print_header("Dymesty Rebranding");

    let rules = RuleSet::standard()?;

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} files to process", files.len()));

    let result = BatchRunner::new(args.jobs).run(files, |path| {
        let name = path.display().to_string();

        if collector::is_excluded(path) {
            return ProcessResult::Skipped(name);
        }

        match transform::transform_file(path, &rules) {
            Ok(FileOutcome::Updated) => ProcessResult::Updated(name),
            Ok(FileOutcome::Unchanged) => ProcessResult::Unchanged(name),
            Err(e) => ProcessResult::Failed(name, e.to_string()),
        }
    });

    output::print_separator();
    output::print_done(&format!(
        "Transformation complete: {} updated, {} unchanged, {} skipped, {} failed ({} total)",
        result.updated,
        result.unchanged,
        result.skipped,
        result.failed,
        result.total()
    ));

    // 失败只作为提示文字输出，不改变退出码（与原始行为一致）
    for (path, err) in result.failures() {
        output::print_warning(&format!("Failed: {}: {}", path, err));
    }

    if let Some(report_path) = &args.report {
        report::write_report(&result.results, report_path)?;
        output::print_info(&format!("Report written to {}", report_path.display()));
    }

    output::print_info("Next steps:");
    output::print_info("  1. Review the transformed files");
    output::print_info("  2. Update any chart data to reflect Dymesty AI Glasses metrics");
    output::print_info("  3. Update the project documentation");
    output::print_info("  4. Commit changes to git");

    Ok(())
}
