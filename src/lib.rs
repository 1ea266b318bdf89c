//! rsclassify - Rust 静态分类映射引擎（键 → 分类二元组）

// 导出全局错误类型
pub use self::error::{RsclassifyError, RscResult};

// 导出配置模块
pub use self::config::{CustomConfigBuilder, ResolverConfig, ResolverOptions, RuleOrigin};

// 导出规则模块核心接口
pub use self::rule::{
    Category, Rule, RuleDocument, RuleLoader, RuleTable, RuleTableBuilder,
};

// 导出分类模块核心接口（含全局单例简化接口）
pub use self::resolver::{
    CategoryResolver,
    init_global_resolver,
    init_global_resolver_with_table,
    resolve_category,
    resolve_category_pair,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod resolver;

// 嵌入式固化规则表 - 仅在开启embedded-rules特性时编译
#[cfg(feature = "embedded-rules")]
pub mod rsclassify_rules {
    use std::sync::Arc;

    use once_cell::sync::Lazy;

    use crate::rule::{RuleDocument, RuleTable};

    // 随crate发布的默认规则表，编译期固化
    static EMBEDDED_RULES_JSON: &str = include_str!("../data/rsclassify_rules.json");

    /// 全局懒加载的内置规则表单例 - 运行期首次访问初始化，内存中仅一份实例，线程安全
    pub static EMBEDDED_RULE_TABLE: Lazy<Arc<RuleTable>> = Lazy::new(|| {
        let doc: RuleDocument = serde_json::from_str(EMBEDDED_RULES_JSON).unwrap_or_else(|e| {
            eprintln!("致命错误: 内置规则表反序列化失败 - {:?}", e);
            panic!("内置规则表JSON异常，请检查data/rsclassify_rules.json");
        });

        let table = RuleTable::from_document(doc).unwrap_or_else(|e| {
            eprintln!("致命错误: 内置规则表校验失败 - {}", e);
            panic!("内置规则表配置异常，请检查data/rsclassify_rules.json");
        });

        Arc::new(table)
    });

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_embedded_table_loads_and_resolves() {
            let table = EMBEDDED_RULE_TABLE.clone();
            assert!(table.rule_count() > 0);
            assert_eq!(table.category_of("Agadir").as_pair(), ("Souss massa", "Africa"));
            assert_eq!(table.category_of("Tokyo").as_pair(), ("Unknown", "Unknown"));
        }
    }
}
