//! 全局规则配置管理

use std::path::PathBuf;

/// 规则来源
#[derive(Debug, Clone)]
pub enum RuleOrigin {
    Embedded,           // 内置规则（编译期 embed）
    Inline(String),     // 内联 JSON 文档（运行时传入）
    LocalFile(PathBuf), // 本地文件规则（运行时）
}

/// 核心分类选项
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// 未命中回退兜底分类时是否输出 trace 日志
    pub trace_fallback: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            trace_fallback: false,
        }
    }
}

/// 完整分类器配置
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub origin: RuleOrigin,
    pub options: ResolverOptions,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            origin: RuleOrigin::Embedded,
            options: ResolverOptions::default(),
        }
    }
}

impl ResolverConfig {
    /// 内置规则
    pub fn embedded() -> Self {
        Self::default()
    }

    /// 内联 JSON 规则文档
    pub fn inline(json: impl Into<String>) -> Self {
        Self {
            origin: RuleOrigin::Inline(json.into()),
            options: ResolverOptions::default(),
        }
    }

    /// 本地规则文件
    pub fn local_file(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: RuleOrigin::LocalFile(path.into()),
            options: ResolverOptions::default(),
        }
    }
}

/// 自定义构建器（链式 API）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: ResolverConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
        }
    }

    pub fn origin(mut self, origin: RuleOrigin) -> Self {
        self.config.origin = origin;
        self
    }

    pub fn trace_fallback(mut self, trace: bool) -> Self {
        self.config.options.trace_fallback = trace;
        self
    }

    pub fn build(self) -> ResolverConfig {
        self.config
    }
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
