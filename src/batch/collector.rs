//! # 文件收集器
//!
//! 根据输入目录和文件名模式收集待处理文件列表。
//!
//! ## 功能
//! - glob 模式匹配（默认 `*.html`）
//! - 可选递归目录搜索
//! - 结果排序，保证跨次运行输出稳定
//!
//! ## 依赖关系
//! - 被 `commands/apply.rs`, `commands/check.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{RebrandError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 固定排除名单：这些文件已人工处理过，无条件跳过
pub const EXCLUDED_FILES: &[&str] = &[
    "login.html",
    "index.html",
    "00a-geo-channel-diagnostic.html",
];

/// 判断文件是否在排除名单内（按文件名精确匹配）
pub fn is_excluded(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| EXCLUDED_FILES.contains(&name))
        .unwrap_or(false)
}

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 文件名匹配模式
    pattern: String,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            pattern: "*.html".to_string(),
            recursive: false,
        }
    }

    /// 设置文件名匹配模式
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件，排序后返回（排除名单内的文件保留在列表中，
    /// 由处理方决定跳过并上报）
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.input.is_dir() {
            return Err(RebrandError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let glob_pattern = glob::Pattern::new(&self.pattern).map_err(|e| {
            RebrandError::InvalidArgument(format!("Invalid pattern '{}': {}", self.pattern, e))
        })?;

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|name| glob_pattern.matches(name))
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_exclusion_list() {
        assert!(is_excluded(Path::new("/site/login.html")));
        assert!(is_excluded(Path::new("index.html")));
        assert!(is_excluded(Path::new(
            "/deep/dir/00a-geo-channel-diagnostic.html"
        )));
        assert!(!is_excluded(Path::new("/site/01-dashboard.html")));
        assert!(!is_excluded(Path::new("login.html.bak")));
    }

    #[test]
    fn test_collect_filters_and_sorts() {
        let dir = std::env::temp_dir().join(format!("rebrand-collect-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("b.html"), "b").unwrap();
        fs::write(dir.join("a.html"), "a").unwrap();
        fs::write(dir.join("notes.txt"), "x").unwrap();

        let files = FileCollector::new(dir.clone()).collect().unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.html", "b.html"]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let missing = std::env::temp_dir().join("rebrand-no-such-dir");
        let err = FileCollector::new(missing).collect().unwrap_err();
        assert!(matches!(err, RebrandError::DirectoryNotFound { .. }));
    }
}
