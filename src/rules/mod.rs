//! # 替换规则模块
//!
//! 将静态规则表编译为 `RuleSet`，并提供纯函数式的文本替换入口。
//!
//! ## 功能
//! - 启动时构建一次，构建后不可变，显式传入各处理函数
//! - 三个规则组按固定顺序应用：通用术语 → 产品专属 → 标题重写 → UI 正则
//! - 每条规则替换当前文本中的全部匹配，后续规则作用于已替换的文本
//!
//! ## 依赖关系
//! - 被 `transform.rs`, `commands/` 使用
//! - 使用 `rules/tables.rs` 的静态表
//! - 使用 `regex` 编译标题与 UI 规则

pub mod tables;

use crate::error::Result;
use regex::Regex;

/// 单次应用的各规则组替换计数
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ApplyStats {
    /// 通用术语组替换数
    pub general: usize,
    /// 产品专属组替换数
    pub product: usize,
    /// 标题重写替换数
    pub title: usize,
    /// UI 正则组替换数
    pub ui: usize,
}

impl ApplyStats {
    /// 总替换数
    pub fn total(&self) -> usize {
        self.general + self.product + self.title + self.ui
    }
}

/// 品牌迁移规则集
pub struct RuleSet {
    general: &'static [(&'static str, &'static str)],
    product: &'static [(&'static str, &'static str)],
    title_span: Regex,
    ui: Vec<(Regex, &'static str)>,
}

impl RuleSet {
    /// 构建标准规则集（表内容见 `rules/tables.rs`）
    pub fn standard() -> Result<Self> {
        let ui = tables::UI_PATTERNS
            .iter()
            .map(|(pattern, replacement)| Ok((Regex::new(pattern)?, *replacement)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            general: tables::GENERAL_TERMS,
            product: tables::PRODUCT_TERMS,
            title_span: Regex::new(tables::TITLE_SPAN_PATTERN)?,
            ui,
        })
    }

    /// 对文本应用全部规则组，返回替换后的文本
    pub fn apply(&self, text: &str) -> String {
        self.apply_counted(text).0
    }

    /// 对文本应用全部规则组，同时统计各组替换数量
    pub fn apply_counted(&self, text: &str) -> (String, ApplyStats) {
        let mut stats = ApplyStats::default();

        let content = apply_literals(self.general, text, &mut stats.general);
        let content = apply_literals(self.product, &content, &mut stats.product);
        let content = self.rewrite_titles(&content, &mut stats.title);

        let mut content = content;
        for (re, replacement) in &self.ui {
            stats.ui += re.find_iter(&content).count();
            content = re.replace_all(&content, *replacement).into_owned();
        }

        (content, stats)
    }

    /// 在每个 `<title>...</title>` 范围内做标题词条替换，范围外不动
    fn rewrite_titles(&self, text: &str, count: &mut usize) -> String {
        self.title_span
            .replace_all(text, |caps: &regex::Captures| {
                let span = &caps[0];
                *count += span.matches(tables::TITLE_FROM).count();
                span.replace(tables::TITLE_FROM, tables::TITLE_TO)
            })
            .into_owned()
    }
}

/// 按表序对文本应用一组字面量规则，每条替换全部出现
fn apply_literals(
    rules: &[(&str, &str)],
    text: &str,
    count: &mut usize,
) -> String {
    let mut content = text.to_string();
    for (pattern, replacement) in rules {
        if pattern == replacement {
            continue;
        }
        let hits = content.matches(pattern).count();
        if hits > 0 {
            *count += hits;
            content = content.replace(pattern, replacement);
        }
    }
    content
}
