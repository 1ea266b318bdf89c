//! Category resolver core module
//! 分类器核心
//! 核心职责：
//! 1. 规则表加载与校验（内置/内联/本地规则）
//! 2. 键 → 分类的全量解析（精确匹配 + 兜底分类）
//! 3. 规则表多线程共享（Arc，构建后只读）

use std::sync::Arc;

use crate::config::ResolverConfig;
use crate::error::RscResult;
use crate::rule::{Category, RuleLoader, RuleTable};

/// 分类器核心结构体
/// 设计说明：
/// - table: 校验后的规则表（Arc共享，构建后只读）
/// - config: 分类器配置（保留配置上下文）
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    /// 校验后的规则表（Arc保证多线程共享）
    table: Arc<RuleTable>,
    /// 分类器配置（保留配置上下文）
    config: ResolverConfig,
}

impl CategoryResolver {
    /// 使用内存中的RuleTable创建分类器
    /// 适用场景：预构建规则表后手动创建分类器
    pub fn with_table(table: RuleTable, config: ResolverConfig) -> Self {
        Self {
            table: Arc::new(table),
            config,
        }
    }

    /// 使用内置规则表创建分类器（仅embedded-rules特性开启时可用）
    #[cfg(feature = "embedded-rules")]
    pub fn with_embedded_rules(config: ResolverConfig) -> Self {
        Self {
            table: crate::rsclassify_rules::EMBEDDED_RULE_TABLE.clone(),
            config,
        }
    }

    /// 创建分类器
    /// 支持规则来源：
    /// 1. Embedded：内置规则（需开启embedded-rules特性）
    /// 2. Inline/LocalFile：运行时加载
    pub fn new(config: ResolverConfig) -> RscResult<Self> {
        match &config.origin {
            #[cfg(feature = "embedded-rules")]
            crate::config::RuleOrigin::Embedded => Ok(Self::with_embedded_rules(config)),

            origin => {
                let table = RuleLoader::new().load(origin)?;
                log::info!(
                    "CategoryResolver initialized: {} rules, {} keys",
                    table.rule_count(),
                    table.key_count()
                );
                Ok(Self {
                    table: Arc::new(table),
                    config,
                })
            }
        }
    }

    /// 解析输入键对应的分类
    /// 借用语义：&self 只读，返回表内分类的共享引用，调用方不获得所有权
    /// 全量保证：任意输入（含空串）都有结果，未命中返回兜底分类，绝不失败
    pub fn resolve(&self, key: &str) -> &Category {
        match self.table.lookup(key) {
            Some(category) => category,
            None => {
                if self.config.options.trace_fallback {
                    log::trace!("Key [{}] not matched, falling back to default category", key);
                }
                self.table.default_category()
            }
        }
    }

    /// 解析并返回分类副本
    /// 拷贝语义：调用方持有独立所有权，后续修改不影响规则表
    pub fn resolve_owned(&self, key: &str) -> Category {
        self.resolve(key).clone()
    }

    /// 解析并拆解为 (primary, secondary) 引用二元组
    pub fn resolve_pair(&self, key: &str) -> (&str, &str) {
        self.resolve(key).as_pair()
    }

    // 显式转发规则表只读能力，不整表暴露

    /// 兜底分类
    pub fn default_category(&self) -> &Category {
        self.table.default_category()
    }

    /// 规则条数
    pub fn rule_count(&self) -> usize {
        self.table.rule_count()
    }

    /// 已索引键总数
    pub fn key_count(&self) -> usize {
        self.table.key_count()
    }
}
