//! 分类模块统一出口
//! 分类器核心 + 全局单例管理

pub mod resolver;
pub mod global;

pub use resolver::CategoryResolver;
pub use global::{
    init_global_resolver, init_global_resolver_with_table, resolve_category,
    resolve_category_pair,
};
