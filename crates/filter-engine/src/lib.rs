//! 过滤器引擎
//!
//! 将声明式的文本过滤规则（"field.operator = limit"）解析为可执行的
//! 比较条件，并对任意记录逐条求值。支持：
//! - 规则的字符串/对象双向序列化
//! - 整数/文本统一归一化后的类型一致比较
//! - 内置默认字段与插件过滤器的发现与合并（插件优先，按字段去重）

pub mod error;
pub mod fields;
pub mod filter;
pub mod operators;
pub mod plugins;
pub mod registry;
pub mod value;

pub use error::{FilterError, Result};
pub use fields::filter_fields;
pub use filter::{Filter, FilterBehavior, FilterDescriptor, Record};
pub use operators::Operator;
pub use plugins::{FilterPlugin, Over18Filter};
pub use registry::{config_from_json, FilterConfig, FilterRegistry};
pub use value::FilterValue;
