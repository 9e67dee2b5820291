//! # 替换规则表
//!
//! 品牌迁移使用的静态替换表，分三个有序规则组。
//!
//! ## 顺序约束
//! 表内顺序即应用顺序：长词条必须排在其子串词条之前
//! （如 `GEO系统` 在 `GEO` 之前，`实时监控` 在 `监控` 之前），
//! 否则短规则先命中会产生拼接残片。
//!
//! ## 依赖关系
//! - 被 `rules/mod.rs` 使用

/// 通用术语规则组（中文术语、公司/产品名、导航与指标词条）。
///
/// AI 平台名（ChatGPT、Perplexity 等）是恒等词条：
/// 品牌迁移刻意保持这些名称不变，保留在表中作为术语清单。
pub const GENERAL_TERMS: &[(&str, &str)] = &[
    // Chinese to English translations
    ("GEO系统", "Dymesty AI System"),
    ("GEO平台", "Dymesty Platform"),
    ("GEO内容资产库", "Dymesty Content Asset Library"),
    ("GEO", "AI Platform"),
    ("生成式引擎优化", "AI Platform Optimization"),
    ("AI能见度指数", "AI Visibility Index"),
    ("声量份额", "Share of Voice"),
    // Company/Product transformations
    ("Leap Company", "Dymesty"),
    ("leap公司", "Dymesty"),
    ("Eureka", "Dymesty AI Glasses"),
    ("robot vacuum", "AI glasses"),
    ("vacuum cleaner", "smart glasses"),
    ("吸尘器", "smart glasses"),
    ("机器人", "AI assistant"),
    // Common Chinese UI elements to English
    ("渠道诊断", "Channel Diagnostics"),
    ("策略规划", "Strategy Planning"),
    ("问题收集", "Question Collection"),
    ("资产创作", "Asset Creation"),
    ("内容编排", "Content Orchestration"),
    ("渠道配置", "Channel Configuration"),
    ("用户旅程", "User Journey"),
    ("实时监控", "Real-time Monitoring"),
    ("品牌表现", "Brand Performance"),
    ("可见性分析", "Visibility Analytics"),
    ("感知分析", "Perception Analytics"),
    ("引用分析", "Citation Analytics"),
    ("问题分析", "Question Analytics"),
    // Navigation and UI elements
    ("监控面板", "Monitoring Dashboard"),
    ("数据库", "Database"),
    ("编排", "Orchestration"),
    ("分发", "Distribution"),
    ("互动", "Engagement"),
    ("监控", "Monitoring"),
    // Metrics and indicators
    ("覆盖率", "Coverage Rate"),
    ("情感得分", "Sentiment Score"),
    ("引用率", "Citation Rate"),
    ("权威得分", "Authority Score"),
    // AI platforms - ensure consistent naming
    ("ChatGPT", "ChatGPT"),
    ("Perplexity", "Perplexity"),
    ("Claude", "Claude"),
    ("Gemini", "Gemini"),
    ("You.com", "You.com"),
    ("Bing Chat", "Bing Chat"),
];

/// Dymesty 产品专属规则组（产品特性与渠道词条）。
pub const PRODUCT_TERMS: &[(&str, &str)] = &[
    // Product features - kept stable across the rebrand
    ("real-time translation", "real-time translation"),
    ("privacy protection", "privacy protection"),
    ("battery life", "battery life"),
    ("SDK integration", "SDK integration"),
    ("developer tools", "developer tools"),
    ("AR display", "AR display"),
    // Channels relevant to AI glasses
    ("Social Media", "Developer Forums"),
    ("Review Sites", "Tech Reviews"),
    ("E-commerce", "Product Demos"),
    ("Video Platforms", "YouTube Demos"),
    ("Blogs & Forums", "GitHub/Docs"),
    ("Official Sites", "Official Dymesty"),
];

/// 页面标题重写：只在 `<title>...</title>` 范围内生效
pub const TITLE_SPAN_PATTERN: &str = r"<title>[^<]*</title>";
pub const TITLE_FROM: &str = "Content Intelligence Center";
pub const TITLE_TO: &str = "Dymesty AI Glasses Intelligence Center";

/// 残留中文 UI 词条的正则规则组。
///
/// 这些单词条正则没有边界限定，会命中属性值或更长词内部的子串，
/// 与原始实现一致（已知缺口，保持不改）。
pub const UI_PATTERNS: &[(&str, &str)] = &[
    ("确认", "Confirm"),
    ("取消", "Cancel"),
    ("提交", "Submit"),
    ("保存", "Save"),
    ("删除", "Delete"),
    ("编辑", "Edit"),
    ("新建", "New"),
    ("搜索", "Search"),
    ("返回", "Back"),
    ("下一步", "Next"),
];
