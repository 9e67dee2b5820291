//! # check 命令实现
//!
//! 干跑模式：扫描目录并以表格列出将被修改的文件，不写任何文件。
//!
//! ## 功能
//! - 与 apply 相同的收集与规则应用路径
//! - 按规则组统计每个文件的替换数量
//! - 用 `tabled` 渲染结果表
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `rules/`, `transform.rs`, `batch/collector.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{collector, FileCollector};
use crate::cli::check::CheckArgs;
use crate::error::Result;
use crate::rules::RuleSet;
use crate::transform;
use crate::utils::{output, progress};

use tabled::{Table, Tabled};

/// 结果表中的一行
#[derive(Debug, Tabled)]
struct ChangeRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "General")]
    general: usize,
    #[tabled(rename = "Product")]
    product: usize,
    #[tabled(rename = "Title")]
    title: usize,
    #[tabled(rename = "UI")]
    ui: usize,
    #[tabled(rename = "Total")]
    total: usize,
}

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    output::print_header("Dymesty Rebranding (dry run)");

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

    output::print_info(&format!("Inspecting {} files", files.len()));

    let pb = progress::create_progress_bar(files.len() as u64, "Inspecting");

    let mut rows: Vec<ChangeRow> = Vec::new();
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for path in &files {
        let name = path.display().to_string();

        if collector::is_excluded(path) {
            skipped += 1;
            pb.suspend(|| output::print_skip(&format!("Skipping already processed: {}", name)));
            pb.inc(1);
            continue;
        }

        match transform::preview_file(path, &rules) {
            Ok(Some(stats)) => rows.push(ChangeRow {
                file: name,
                general: stats.general,
                product: stats.product,
                title: stats.title,
                ui: stats.ui,
                total: stats.total(),
            }),
            Ok(None) => {}
            Err(e) => {
                failed += 1;
                pb.suspend(|| output::print_error(&format!("Error processing {}: {}", name, e)));
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }

    output::print_done(&format!(
        "{} of {} files would change ({} skipped, {} failed)",
        rows.len(),
        files.len(),
        skipped,
        failed
    ));

    Ok(())
}
