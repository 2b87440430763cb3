//! URL模式数据模型定义
//! 仅存储模式数据，无任何匹配逻辑，支持序列化/反序列化

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{PageMinderError, PmResult};

/// 模式类型（决定使用哪种匹配算法）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    /// 通配符：`*` 匹配任意字符序列，其余字符按字面匹配
    #[default]
    Wildcard,
    /// 正则：按正则语法编译，非锚定匹配
    Regex,
}

impl PatternType {
    pub fn as_str(self) -> &'static str {
        match self {
            PatternType::Wildcard => "wildcard",
            PatternType::Regex => "regex",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternType {
    type Err = PageMinderError;

    fn from_str(s: &str) -> PmResult<Self> {
        match s {
            "wildcard" => Ok(PatternType::Wildcard),
            "regex" => Ok(PatternType::Regex),
            other => Err(PageMinderError::InvalidInput(format!("unknown pattern type: {}", other))),
        }
    }
}

/// 带模式文本的类型视图（借用 UrlPattern 内的文本）
/// 所有分派均对该枚举做穷尽匹配
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRule<'a> {
    Wildcard(&'a str),
    Regex(&'a str),
}

impl<'a> PatternRule<'a> {
    /// 模式原始文本
    pub fn text(&self) -> &'a str {
        match self {
            PatternRule::Wildcard(text) | PatternRule::Regex(text) => text,
        }
    }

    pub fn pattern_type(&self) -> PatternType {
        match self {
            PatternRule::Wildcard(_) => PatternType::Wildcard,
            PatternRule::Regex(_) => PatternType::Regex,
        }
    }
}

/// URL模式记录
/// 由调用方创建并持有，匹配器只读不改
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UrlPattern {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PatternType,
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UrlPattern {
    pub fn new(id: impl Into<String>, kind: PatternType, pattern: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            pattern: pattern.into(),
            description: None,
        }
    }

    pub fn wildcard(id: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(id, PatternType::Wildcard, pattern)
    }

    pub fn regex(id: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(id, PatternType::Regex, pattern)
    }

    /// 附加说明（返回新记录，原记录不变）
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 模式文本是否为空白（空白字符集与浏览器 `String.prototype.trim` 一致）
    pub fn is_blank(&self) -> bool {
        is_blank(&self.pattern)
    }

    /// 获取类型视图
    pub fn rule(&self) -> PatternRule<'_> {
        match self.kind {
            PatternType::Wildcard => PatternRule::Wildcard(&self.pattern),
            PatternType::Regex => PatternRule::Regex(&self.pattern),
        }
    }
}

/// 与 JS `trim()` 一致的空白判断：包含 U+FEFF，不包含 U+0085
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// 文本是否为空或仅由空白组成
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_js_whitespace)
}

// ======== 为 UrlPattern 实现 Display trait（用于日志输出） ========
impl fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}:{}", self.id, self.kind, self.pattern)
    }
}
