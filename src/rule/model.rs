//! 通用分类规则模型
//! 规则即数据：键集合 → 分类二元组，统一 JSON 结构

use serde::{Deserialize, Serialize};

/// 分类二元组（主分类 + 次分类，如 地区 + 大洲）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub primary: String,
    pub secondary: String,
}

impl Category {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// 拆解为 (primary, secondary) 引用二元组（零拷贝）
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.primary, &self.secondary)
    }
}

/// 分类规则定义（一组等价键 → 一个分类）
/// 键为精确匹配、大小写敏感，全表范围内不允许重复
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rule {
    pub keys: Vec<String>,
    pub category: Category,
}

impl Rule {
    pub fn new<I, S>(keys: I, category: Category) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            category,
        }
    }
}

/// 规则文档根结构（JSON 反序列化入口）
/// default 字段强制存在：缺失即解析失败，绝不静默补默认值
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleDocument {
    pub default: Category,
    #[serde(default)]
    pub rules: Vec<Rule>,
}
