//! 过滤器操作符定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 比较操作符
///
/// 每个操作符有一个规范的文本 token（如 ".min"），既用于解析
/// 规则键，也用于把过滤器重新序列化回键字符串。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    Minimum,
    Maximum,
    Match,
}

impl Operator {
    /// 全部操作符，按声明顺序
    pub const ALL: [Operator; 4] = [
        Operator::Equals,
        Operator::Minimum,
        Operator::Maximum,
        Operator::Match,
    ];

    /// 规范文本 token（带分隔符前缀）
    pub fn token(&self) -> &'static str {
        match self {
            Self::Equals => ".equals",
            Self::Minimum => ".min",
            Self::Maximum => ".max",
            Self::Match => ".match",
        }
    }

    /// 不带分隔符的名称，用于人类可读展示
    pub fn name(&self) -> &'static str {
        &self.token()[1..]
    }

    /// 根据 token 反查操作符
    pub fn from_token(token: &str) -> Option<Operator> {
        Self::ALL.iter().copied().find(|op| op.token() == token)
    }

    /// 在原始规则键中扫描已知 token（大小写不敏感的子串匹配）
    ///
    /// 仅负责识别 token；"无 token 时默认 Equals、有分隔符但无
    /// 法识别时报错" 的规则由 `Filter::from_obj` 决定。
    pub fn detect(key: &str) -> Option<Operator> {
        let lowered = key.to_lowercase();
        Self::ALL.iter().copied().find(|op| lowered.contains(op.token()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_token(op.token()), Some(op));
        }
        assert_eq!(Operator::from_token(".bogus"), None);
    }

    #[test]
    fn test_detect_in_key() {
        assert_eq!(Operator::detect("created_utc.min"), Some(Operator::Minimum));
        assert_eq!(Operator::detect("created_utc.max"), Some(Operator::Maximum));
        assert_eq!(Operator::detect("title.match"), Some(Operator::Match));
        assert_eq!(Operator::detect("subreddit.equals"), Some(Operator::Equals));
        assert_eq!(Operator::detect("score"), None);
        assert_eq!(Operator::detect("score.bogus"), None);
    }

    #[test]
    fn test_detect_case_insensitive() {
        assert_eq!(Operator::detect("TITLE.MATCH"), Some(Operator::Match));
        assert_eq!(Operator::detect("Score.Min"), Some(Operator::Minimum));
    }

    #[test]
    fn test_display_strips_separator() {
        assert_eq!(Operator::Minimum.to_string(), "min");
        assert_eq!(Operator::Equals.to_string(), "equals");
    }
}
