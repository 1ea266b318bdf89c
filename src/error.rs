//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum RsclassifyError {
    // 规则相关错误
    #[error("规则键冲突：{0}")]
    RuleConflictError(String),
    #[error("规则校验失败：{0}")]
    RuleValidationError(String),
    #[error("规则加载失败：{0}")]
    RuleLoadError(String),
    #[error("规则解析失败：{0}")]
    RuleParseError(String),

    // 分类器相关错误
    #[error("分类器未初始化：{0}")]
    ResolverNotInitialized(String),
    #[error("分类器初始化失败：{0}")]
    ResolverInitError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
}

// 全局Result类型
pub type RscResult<T> = Result<T, RsclassifyError>;
