//! 插件过滤器
//!
//! 插件是无状态的过滤器模板：每次绑定尝试都通过 `create` 产出
//! 全新实例。注册表（`registry`）在发现时优先尝试插件，再回退
//! 到默认字段目录。

use crate::filter::{Filter, FilterBehavior};
use crate::operators::Operator;
use serde_json::Value;
use std::sync::Arc;

/// 插件过滤器的工厂接口
///
/// 实现者绑定到固定的一个字段，可通过 `Filter` 的构造选项覆盖
/// 默认 operator、accepts_operator 和行为扩展。
pub trait FilterPlugin: Send + Sync {
    /// 插件认领的字段名
    fn field(&self) -> &'static str;

    /// 创建一个未绑定的过滤器实例
    fn create(&self) -> Filter;
}

/// over_18 字段的专用过滤器
///
/// 通用归一化会把布尔字段值转成 1/0，而配置里的 "true"/"false"
/// 文本保持为文本，两侧永远不相等。本插件把配置限定值也归一到
/// 1/0，并拒绝无法理解的值（放弃绑定）。只支持相等比较。
pub struct Over18Filter;

impl FilterPlugin for Over18Filter {
    fn field(&self) -> &'static str {
        "over_18"
    }

    fn create(&self) -> Filter {
        Filter::new(
            self.field(),
            "If this post is age-limited, AKA \"NSFW\". (True/False)",
        )
        .with_operator(Operator::Equals)
        .with_accepts_operator(false)
        .with_behavior(Arc::new(Over18Behavior))
    }
}

#[derive(Debug)]
struct Over18Behavior;

impl FilterBehavior for Over18Behavior {
    fn convert_limit(&self, raw: &Value) -> Option<Value> {
        match raw {
            Value::Bool(b) => Some(Value::from(*b as i64)),
            Value::Number(n) => match n.as_f64() {
                Some(f) if f == 0.0 || f == 1.0 => Some(Value::from(f as i64)),
                _ => None,
            },
            Value::String(s) => match s.trim().to_lowercase().as_str() {
                "true" | "1" => Some(Value::from(1)),
                "false" | "0" => Some(Value::from(0)),
                _ => None,
            },
            _ => None,
        }
    }
}
