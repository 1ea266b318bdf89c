//! 全局分类器单例管理
//! 核心职责：
//! 1. 维护进程生命周期内唯一的CategoryResolver实例
//! 2. 提供幂等初始化接口（配置初始化/注入规则表初始化）
//! 3. 支持懒加载初始化（默认配置）
//! 4. 统一错误处理和状态管理

use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};

use super::resolver::CategoryResolver;
use crate::config::ResolverConfig;
use crate::error::{RscResult, RsclassifyError};
use crate::rule::{Category, RuleTable};

/// 全局分类器实例 - 线程安全单例
/// OnceCell确保实例仅初始化一次，整体发布对并发读者原子可见
static GLOBAL_RESOLVER: Lazy<Arc<OnceCell<CategoryResolver>>> =
    Lazy::new(|| Arc::new(OnceCell::new()));

/// 初始化全局分类器
/// 幂等设计：已初始化则直接返回Ok(())
pub fn init_global_resolver(config: ResolverConfig) -> RscResult<()> {
    if GLOBAL_RESOLVER.get().is_some() {
        log::debug!("Global resolver already initialized, skip reinitialization");
        return Ok(());
    }

    let resolver = CategoryResolver::new(config).map_err(|e| {
        RsclassifyError::ResolverInitError(format!("Failed to create CategoryResolver: {}", e))
    })?;

    GLOBAL_RESOLVER.set(resolver).map_err(|_| {
        RsclassifyError::ResolverInitError(
            "Global resolver initialization failed: instance already initialized by another thread"
                .to_string(),
        )
    })?;

    log::info!("Global CategoryResolver initialized successfully");
    Ok(())
}

/// 注入规则表，初始化全局分类器
/// 适用场景：预构建规则表后手动初始化
pub fn init_global_resolver_with_table(table: RuleTable, config: ResolverConfig) -> RscResult<()> {
    if GLOBAL_RESOLVER.get().is_some() {
        log::debug!("Global resolver already initialized, skip reinitialization with custom table");
        return Ok(());
    }

    let resolver = CategoryResolver::with_table(table, config);

    GLOBAL_RESOLVER.set(resolver).map_err(|_| {
        RsclassifyError::ResolverInitError(
            "Global resolver initialization failed: instance already initialized by another thread"
                .to_string(),
        )
    })?;

    log::info!("Global CategoryResolver initialized with custom rule table");
    Ok(())
}

/// 懒加载初始化全局分类器（内部辅助函数）
/// 仅当实例未初始化时，按默认配置（内置规则）初始化
fn lazy_init() -> RscResult<()> {
    if GLOBAL_RESOLVER.get().is_none() {
        log::debug!("Lazy initializing global CategoryResolver with default config");
        init_global_resolver(ResolverConfig::default())?;
    }
    Ok(())
}

/// 获取全局分类器实例（自动懒加载）
/// 返回静态引用：进程生命周期内有效
pub(crate) fn get_global_resolver() -> RscResult<&'static CategoryResolver> {
    lazy_init()?;

    GLOBAL_RESOLVER.get().ok_or_else(|| {
        RsclassifyError::ResolverNotInitialized(
            "Global CategoryResolver not initialized! Please call init_global_resolver first"
                .to_string(),
        )
    })
}

/// 简化接口：通过全局分类器解析键对应的分类（返回副本）
pub fn resolve_category(key: &str) -> RscResult<Category> {
    Ok(get_global_resolver()?.resolve_owned(key))
}

/// 简化接口：通过全局分类器解析并返回 (primary, secondary) 二元组
pub fn resolve_category_pair(key: &str) -> RscResult<(String, String)> {
    let category = resolve_category(key)?;
    Ok((category.primary, category.secondary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleTableBuilder;

    // OnceCell进程内共享，全部断言收敛到单个测试函数
    #[test]
    fn test_global_init_and_resolve() {
        let table = RuleTableBuilder::new()
            .rule(
                ["Agadir", "Taroudant", "Ouled teima"],
                Category::new("Souss massa", "Africa"),
            )
            .rule(["New york", "NYC"], Category::new("New York", "North america"))
            .default_category(Category::new("Unknown", "Unknown"))
            .build()
            .unwrap();

        init_global_resolver_with_table(table, ResolverConfig::default()).unwrap();

        let (primary, secondary) = resolve_category_pair("Agadir").unwrap();
        assert_eq!((primary.as_str(), secondary.as_str()), ("Souss massa", "Africa"));

        assert_eq!(
            resolve_category("Tokyo").unwrap().as_pair(),
            ("Unknown", "Unknown")
        );

        // 幂等：重复初始化直接返回Ok，且不替换已发布实例
        init_global_resolver(ResolverConfig::default()).unwrap();
        assert_eq!(
            resolve_category("NYC").unwrap().as_pair(),
            ("New York", "North america")
        );
    }
}
