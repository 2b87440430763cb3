//! 编译后模式模型
//! 正则编译后的结构

use std::sync::Arc;
use regex::Regex;

use super::wildcard::WildcardMatcher;
use crate::rule::UrlPattern;

#[derive(Debug, Clone)]
pub enum Matcher {
    Wildcard(WildcardMatcher), // 通配符（字面片段匹配，全字符串锚定）
    Regex(Regex), // 用户正则（非锚定）
    Invalid(String), // 编译失败，保存失败原因，不匹配任何URL
}

impl Matcher {
    /// 简单匹配判断
    pub fn is_match(&self, input: &str) -> bool {
        match self {
            Matcher::Wildcard(wildcard) => wildcard.is_match(input),
            Matcher::Regex(regex) => regex.is_match(input),
            Matcher::Invalid(_) => false,
        }
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        match self {
            Matcher::Wildcard(w) => w.as_str(),
            Matcher::Regex(r) => r.as_str(),
            Matcher::Invalid(_) => "invalid",
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Matcher::Invalid(_))
    }
}

/// 编译后的单条URL模式
#[derive(Debug, Clone)]
pub struct CompiledUrlPattern {
    pub source: UrlPattern,
    pub matcher: Matcher,
}

impl CompiledUrlPattern {
    pub fn is_match(&self, url: &str) -> bool {
        self.matcher.is_match(url)
    }

    /// 模式是否有效（非空白且编译成功）
    pub fn is_valid(&self) -> bool {
        !self.source.is_blank() && !self.matcher.is_invalid()
    }

    /// 编译失败原因
    pub fn error(&self) -> Option<&str> {
        match &self.matcher {
            Matcher::Invalid(reason) => Some(reason),
            _ => None,
        }
    }
}

/// 编译后的模式集合（构建后只读，可跨线程共享）
#[derive(Debug, Clone, Default)]
pub struct CompiledPatternSet {
    pub(crate) patterns: Arc<[CompiledUrlPattern]>,
}

impl CompiledPatternSet {
    /// 任一模式匹配即返回 true（短路）
    pub fn is_match_any(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(url))
    }

    /// 返回所有匹配的模式（保持原始顺序，不去重）
    pub fn find_matching(&self, url: &str) -> Vec<&UrlPattern> {
        self.patterns
            .iter()
            .filter(|p| p.is_match(url))
            .map(|p| &p.source)
            .collect()
    }

    /// 返回所有无效模式
    pub fn invalid_patterns(&self) -> Vec<&CompiledUrlPattern> {
        self.patterns.iter().filter(|p| !p.is_valid()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledUrlPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
