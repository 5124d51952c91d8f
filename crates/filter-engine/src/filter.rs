//! 过滤器核心类型
//!
//! `Filter` 表示一条 field/operator/limit 过滤条件，负责：
//! - 从配置键值对解析（`from_obj`）
//! - 对记录求值（`check`）
//! - 序列化回配置格式（`to_keyval`）和展示对象（`descriptor`）
//!
//! 插件通过 `FilterBehavior` 覆盖限定值转换或比较逻辑。

use crate::error::{FilterError, Result};
use crate::operators::Operator;
use crate::value::FilterValue;
use regex::RegexBuilder;
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// 被过滤的记录
///
/// 任何能按名称暴露字段值的对象。JSON 对象自带实现。
pub trait Record {
    /// 返回指定字段的值，字段不存在时返回 None
    fn field(&self, name: &str) -> Option<Value>;
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|map| map.get(name)).cloned()
    }
}

impl Record for serde_json::Map<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// 插件过滤器的行为扩展点
///
/// 两个方法都有默认实现，插件只需覆盖自己关心的部分。
pub trait FilterBehavior: Send + Sync + fmt::Debug {
    /// 转换配置导入的原始限定值
    ///
    /// 默认原样返回。返回 None 表示值无效，放弃本次绑定
    /// （`from_obj` 返回 false，过滤器保持未变）。
    fn convert_limit(&self, raw: &Value) -> Option<Value> {
        Some(raw.clone())
    }

    /// 自定义比较逻辑
    ///
    /// 返回 None 表示走通用比较。
    fn check(
        &self,
        value: &FilterValue,
        operator: Operator,
        limit: &FilterValue,
    ) -> Option<Result<bool>> {
        let _ = (value, operator, limit);
        None
    }
}

/// 过滤器展示对象，供外部渲染使用
#[derive(Debug, Clone, Serialize)]
pub struct FilterDescriptor {
    pub field: String,
    pub operator: Option<&'static str>,
    pub accepts_operator: bool,
    pub limit: Option<Value>,
    pub description: String,
}

/// 一条过滤条件
///
/// field 和 description 构造后不可变；operator/limit 在绑定
/// 配置项（`from_obj`）后才可用于比较。
#[derive(Debug, Clone)]
pub struct Filter {
    field: String,
    operator: Option<Operator>,
    limit: Option<FilterValue>,
    description: String,
    accepts_operator: bool,
    behavior: Option<Arc<dyn FilterBehavior>>,
}

impl Filter {
    /// 创建一个未绑定的通用过滤器。field 不能为空。
    pub fn new(field: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: None,
            limit: None,
            description: description.into(),
            accepts_operator: true,
            behavior: None,
        }
    }

    /// 设置行为扩展（插件用）
    pub fn with_behavior(mut self, behavior: Arc<dyn FilterBehavior>) -> Self {
        self.behavior = Some(behavior);
        self
    }

    /// 标记该过滤器只支持固定比较方式（插件用）
    pub fn with_accepts_operator(mut self, accepts: bool) -> Self {
        self.accepts_operator = accepts;
        self
    }

    /// 预设操作符（插件用）
    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn limit(&self) -> Option<&FilterValue> {
        self.limit.as_ref()
    }

    pub fn accepts_operator(&self) -> bool {
        self.accepts_operator
    }

    /// 设置限定值，按需归一化
    pub fn set_limit(&mut self, limit: &Value) {
        self.limit = Some(FilterValue::cast(limit));
    }

    /// 对记录求值
    ///
    /// 记录缺少字段、operator/limit 未设置都是致命错误。
    /// 归一化后任一侧为文本时，两侧都按小写字符串比较。
    pub fn check(&self, record: &dyn Record) -> Result<bool> {
        let raw = record
            .field(&self.field)
            .ok_or_else(|| FilterError::FieldNotFound(self.field.clone()))?;
        let value = FilterValue::cast(&raw);

        let operator = self
            .operator
            .ok_or_else(|| FilterError::InvalidComparator(self.field.clone()))?;
        let limit = self
            .limit
            .as_ref()
            .ok_or_else(|| FilterError::InvalidComparator(self.field.clone()))?;

        if let Some(behavior) = &self.behavior {
            if let Some(result) = behavior.check(&value, operator, limit) {
                return result;
            }
        }

        match operator {
            Operator::Maximum => Ok(compare(&value, limit) != Ordering::Greater),
            Operator::Minimum => Ok(compare(&value, limit) != Ordering::Less),
            Operator::Equals => Ok(compare(&value, limit) == Ordering::Equal),
            Operator::Match => {
                let pattern = limit.to_string();
                let regex = RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| FilterError::InvalidRegex { pattern, source })?;
                Ok(regex.is_match(&value.to_string()))
            }
        }
    }

    /// 尝试把一条配置键值对绑定到本过滤器
    ///
    /// 键不含本字段名时返回 Ok(false)，不做任何修改，供多个候选
    /// 过滤器廉价探测同一个键。键含分隔符但无法识别操作符是致命
    /// 的配置错误。行为扩展拒绝限定值时同样返回 Ok(false) 且不
    /// 修改状态。
    ///
    /// 已知限制：子串匹配意味着某字段名是另一字段名的子串时可能
    /// 误匹配（如 "score" 匹配到 "net_score" 的键）。
    pub fn from_obj(&mut self, key: &str, value: &Value) -> Result<bool> {
        if !key.contains(&self.field) {
            return Ok(false);
        }

        let operator = match Operator::detect(key) {
            Some(op) => op,
            None if !key.contains('.') => Operator::Equals,
            None => {
                return Err(FilterError::UnknownOperator {
                    field: self.field.clone(),
                    key: key.to_string(),
                });
            }
        };

        let converted = match &self.behavior {
            Some(behavior) => match behavior.convert_limit(value) {
                Some(v) => v,
                None => return Ok(false),
            },
            None => value.clone(),
        };

        self.operator = Some(operator);
        self.limit = Some(FilterValue::cast(&converted));
        Ok(true)
    }

    /// 重建本过滤器在配置格式中的 (key, value) 表示
    ///
    /// 对任何成功经 `from_obj` 绑定的过滤器，本方法是其逆操作。
    pub fn to_keyval(&self) -> (String, Value) {
        let token = self.operator.map(|op| op.token()).unwrap_or("");
        let value = self
            .limit
            .as_ref()
            .map(|limit| limit.to_json())
            .unwrap_or(Value::Null);
        (format!("{}{}", self.field, token), value)
    }

    /// 构建展示对象
    pub fn descriptor(&self) -> FilterDescriptor {
        FilterDescriptor {
            field: self.field.clone(),
            operator: self.operator.map(|op| op.token()),
            accepts_operator: self.accepts_operator,
            limit: self.limit.as_ref().map(|limit| limit.to_json()),
            description: self.description.clone(),
        }
    }
}

/// 通用比较：两侧都是整数时按数值比，否则按小写字符串比
fn compare(value: &FilterValue, limit: &FilterValue) -> Ordering {
    match (value, limit) {
        (FilterValue::Int(a), FilterValue::Int(b)) => a.cmp(b),
        (a, b) => a
            .to_string()
            .to_lowercase()
            .cmp(&b.to_string().to_lowercase()),
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.operator, &self.limit) {
            (Some(op), Some(limit)) => {
                let rendered = if limit.is_text() {
                    format!("\"{}\"", limit)
                } else {
                    limit.to_string()
                };
                write!(
                    f,
                    "Filter: {} {} {} ({})",
                    self.field,
                    op.name(),
                    rendered,
                    self.description
                )
            }
            _ => write!(f, "Filter: {} ({})", self.field, self.description),
        }
    }
}
