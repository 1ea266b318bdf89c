//! 规则表核心结构
//! 构建期完成全部校验与键索引构建，构建后只读

use rustc_hash::FxHashMap;

use crate::error::{RscResult, RsclassifyError};
use super::model::{Category, Rule, RuleDocument};

/// 不可变规则表
/// 设计说明：
/// - rules: 按定义顺序保存的规则（用于回溯与统计）
/// - default_category: 无规则命中时的兜底分类，构建期强制存在
/// - key_index: 键 → 规则下标的直查索引；键集全表互斥，因此 O(1) 直查
///   与按序首次命中语义等价
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    default_category: Category,
    key_index: FxHashMap<String, usize>,
}

impl RuleTable {
    /// 构建规则表
    /// 构建期校验：任意键全表唯一（跨规则或同规则内重复均视为配置错误）
    /// 空键集规则不参与索引，仅输出告警
    pub fn new(rules: Vec<Rule>, default_category: Category) -> RscResult<Self> {
        let mut key_index: FxHashMap<String, usize> = FxHashMap::default();

        for (idx, rule) in rules.iter().enumerate() {
            if rule.keys.is_empty() {
                log::warn!("Rule #{} has an empty key set and can never match", idx);
            }
            for key in &rule.keys {
                if let Some(prev) = key_index.insert(key.clone(), idx) {
                    return Err(RsclassifyError::RuleConflictError(format!(
                        "键[{}]同时出现在规则#{}与规则#{}",
                        key, prev, idx
                    )));
                }
            }
        }

        log::debug!(
            "RuleTable built: {} rules, {} keys indexed",
            rules.len(),
            key_index.len()
        );

        Ok(Self {
            rules,
            default_category,
            key_index,
        })
    }

    /// 从规则文档构建（JSON 反序列化后的统一入口，校验逻辑与手工构建一致）
    pub fn from_document(doc: RuleDocument) -> RscResult<Self> {
        Self::new(doc.rules, doc.default)
    }

    /// 精确查询键对应的分类（未命中返回 None，不做兜底）
    pub fn lookup(&self, key: &str) -> Option<&Category> {
        self.key_index.get(key).map(|&idx| &self.rules[idx].category)
    }

    /// 全量查询：命中返回规则分类，未命中返回兜底分类
    pub fn category_of(&self, key: &str) -> &Category {
        self.lookup(key).unwrap_or(&self.default_category)
    }

    /// 兜底分类
    pub fn default_category(&self) -> &Category {
        &self.default_category
    }

    /// 规则条数
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// 已索引键总数
    pub fn key_count(&self) -> usize {
        self.key_index.len()
    }

    /// 按定义顺序访问规则
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// 规则表构建器（链式 API）
#[derive(Debug, Clone, Default)]
pub struct RuleTableBuilder {
    rules: Vec<Rule>,
    default_category: Option<Category>,
}

impl RuleTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条规则（键集 → 分类）
    pub fn rule<I, S>(mut self, keys: I, category: Category) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.push(Rule::new(keys, category));
        self
    }

    /// 设置兜底分类（build 前必须调用）
    pub fn default_category(mut self, category: Category) -> Self {
        self.default_category = Some(category);
        self
    }

    /// 完成构建并执行全部校验
    /// 兜底分类缺失属于构建期错误，绝不静默补默认值
    pub fn build(self) -> RscResult<RuleTable> {
        let default_category = self.default_category.ok_or_else(|| {
            RsclassifyError::RuleValidationError("缺少兜底分类（default category）".to_string())
        })?;
        RuleTable::new(self.rules, default_category)
    }
}
