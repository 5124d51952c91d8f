//! 归一化后的比较值
//!
//! 限定值和记录字段值在比较前统一归一化为"整数或文本"的带标签
//! 联合类型，保证比较时两侧类型尽可能一致。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 归一化后的过滤器值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Int(i64),
    Text(String),
}

impl FilterValue {
    /// 把任意 JSON 值归一化为整数或文本
    ///
    /// 先尝试按浮点数解释再向零截断（"3.9" → 3），失败则退回
    /// 字符串形式。布尔值按数值处理（true → 1, false → 0）。
    /// 该归一化是幂等的：对结果的 JSON 形式再次归一化得到相同值。
    pub fn cast(value: &Value) -> FilterValue {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() => FilterValue::Int(f as i64),
                _ => FilterValue::Text(value.to_string()),
            },
            Value::Bool(b) => FilterValue::Int(*b as i64),
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(f) if f.is_finite() => FilterValue::Int(f as i64),
                _ => FilterValue::Text(s.clone()),
            },
            // null/数组/对象退回其 JSON 文本形式
            other => FilterValue::Text(other.to_string()),
        }
    }

    /// 转回 JSON 值，用于序列化和 to_keyval 往返
    pub fn to_json(&self) -> Value {
        match self {
            FilterValue::Int(i) => Value::from(*i),
            FilterValue::Text(s) => Value::from(s.clone()),
        }
    }

    /// 是否为文本值
    pub fn is_text(&self) -> bool {
        matches!(self, FilterValue::Text(_))
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Int(i) => write!(f, "{}", i),
            FilterValue::Text(s) => write!(f, "{}", s),
        }
    }
}
