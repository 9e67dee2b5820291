//! # 批量执行器
//!
//! 对收集到的文件列表逐个执行处理函数并汇总结果。
//!
//! ## 功能
//! - 默认严格顺序执行（与原始单线程行为一致）
//! - `--jobs` 大于 1 或为 0（自动）时使用 rayon 并行
//! - 进度条显示，逐文件结果行通过 `pb.suspend` 输出
//! - 单文件失败不中断批次
//!
//! ## 依赖关系
//! - 被 `commands/apply.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::utils::{output, progress};

use rayon::prelude::*;
use std::path::PathBuf;

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 内容有变化，已写回
    Updated(String),
    /// 内容无变化，未写回
    Unchanged(String),
    /// 排除名单内，跳过
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

impl ProcessResult {
    /// 输出该文件的开始行与结果行（跳过的文件只有一行）
    fn report(&self) {
        match self {
            ProcessResult::Updated(path) => {
                output::print_info(&format!("Processing: {}", path));
                output::print_success(&format!("Updated: {}", path));
            }
            ProcessResult::Unchanged(path) => {
                output::print_info(&format!("Processing: {}", path));
                output::print_info(&format!("No changes needed: {}", path));
            }
            ProcessResult::Skipped(path) => {
                output::print_skip(&format!("Skipping already processed: {}", path));
            }
            ProcessResult::Failed(path, err) => {
                output::print_info(&format!("Processing: {}", path));
                output::print_error(&format!("Error processing {}: {}", path, err));
            }
        }
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 写回数量
    pub updated: usize,
    /// 无变化数量
    pub unchanged: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 逐文件结果（含失败详情）
    pub results: Vec<ProcessResult>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match &result {
            ProcessResult::Updated(_) => self.updated += 1,
            ProcessResult::Unchanged(_) => self.unchanged += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(_, _) => self.failed += 1,
        }
        self.results.push(result);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.updated + self.unchanged + self.skipped + self.failed
    }

    /// 失败详情
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.results.iter().filter_map(|r| match r {
            ProcessResult::Failed(path, err) => Some((path.as_str(), err.as_str())),
            _ => None,
        })
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数（1 = 顺序执行，0 = 自动）
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 处理文件列表，返回汇总结果
    pub fn run<F>(&self, files: Vec<PathBuf>, processor: F) -> BatchResult
    where
        F: Fn(&PathBuf) -> ProcessResult + Sync + Send,
    {
        let total = files.len();
        let pb = progress::create_progress_bar(total as u64, "Processing");

        let results: Vec<ProcessResult> = if self.jobs <= 1 {
            // 顺序路径：保持收集顺序
            files
                .iter()
                .map(|file| {
                    let result = processor(file);
                    pb.suspend(|| result.report());
                    pb.inc(1);
                    result
                })
                .collect()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.jobs)
                .build()
                .expect("failed to build rayon thread pool");

            pool.install(|| {
                files
                    .par_iter()
                    .map(|file| {
                        let result = processor(file);
                        pb.suspend(|| result.report());
                        pb.inc(1);
                        result
                    })
                    .collect()
            })
        };

        pb.finish_and_clear();

        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        batch_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_counts() {
        let mut result = BatchResult::default();
        result.merge(ProcessResult::Updated("a.html".into()));
        result.merge(ProcessResult::Unchanged("b.html".into()));
        result.merge(ProcessResult::Skipped("login.html".into()));
        result.merge(ProcessResult::Failed("c.html".into(), "bad utf-8".into()));

        assert_eq!(result.updated, 1);
        assert_eq!(result.unchanged, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total(), 4);
        assert_eq!(
            result.failures().collect::<Vec<_>>(),
            vec![("c.html", "bad utf-8")]
        );
    }

    #[test]
    fn test_sequential_run_preserves_order_and_isolates_failures() {
        let files: Vec<PathBuf> = ["a.html", "b.html", "c.html"]
            .iter()
            .map(PathBuf::from)
            .collect();

        let result = BatchRunner::new(1).run(files, |path| {
            let name = path.display().to_string();
            if name == "b.html" {
                ProcessResult::Failed(name, "boom".into())
            } else {
                ProcessResult::Updated(name)
            }
        });

        assert_eq!(result.updated, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total(), 3);
        // 顺序路径保持输入顺序
        assert!(matches!(result.results[0], ProcessResult::Updated(_)));
        assert!(matches!(result.results[1], ProcessResult::Failed(_, _)));
        assert!(matches!(result.results[2], ProcessResult::Updated(_)));
    }
}
