//! 过滤器引擎错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("无法解析过滤器操作符: 字段 {field}, 键 '{key}'")]
    UnknownOperator { field: String, key: String },

    #[error("字段不存在: {0}")]
    FieldNotFound(String),

    #[error("过滤器比较器无效: 字段 {0} 的 operator/limit 未设置")]
    InvalidComparator(String),

    #[error("无效的正则表达式 '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },

    #[error("配置解析失败: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
