//! 模式编译器核心
//! 负责将URL模式编译为可执行的匹配器（通配符片段匹配或正则）

use std::time::Instant;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use super::pattern::{CompiledPatternSet, CompiledUrlPattern, Matcher};
use super::wildcard::WildcardMatcher;
use crate::config::MatcherConfig;
use crate::error::{PageMinderError, PmResult};
use crate::rule::{PatternRule, UrlPattern};
use crate::utils::{preview, PREVIEW_MAX_CHARS};

/// 模式编译器
#[derive(Debug, Clone, Default)]
pub struct PatternCompiler {
    config: MatcherConfig,
}

impl PatternCompiler {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// 按配置编译正则（仅用于正则类型，通配符不经过正则）
    pub fn build_regex(source: &str, config: &MatcherConfig) -> PmResult<Regex> {
        let regex = RegexBuilder::new(source)
            .size_limit(config.regex_size_limit)
            .build()?;
        Ok(regex)
    }

    /// 编译单条模式（不会失败，无效正则编译为 Matcher::Invalid）
    pub fn compile_pattern(&self, pattern: &UrlPattern) -> CompiledUrlPattern {
        let matcher = match pattern.rule() {
            PatternRule::Wildcard(text) => Matcher::Wildcard(WildcardMatcher::new(text)),
            PatternRule::Regex(text) => match Self::build_regex(text, &self.config) {
                Ok(regex) => Matcher::Regex(regex),
                Err(e) => self.invalid(pattern, e.to_string()),
            },
        };

        CompiledUrlPattern {
            source: pattern.clone(),
            matcher,
        }
    }

    /// 校验单条模式，返回具体失败原因（布尔版本见 is_valid_url_pattern）
    pub fn validate(&self, pattern: &UrlPattern) -> PmResult<()> {
        if pattern.is_blank() {
            return Err(PageMinderError::EmptyPattern);
        }
        match pattern.rule() {
            // 通配符总是有效
            PatternRule::Wildcard(_) => Ok(()),
            PatternRule::Regex(text) => Self::build_regex(text, &self.config).map(|_| ()),
        }
    }

    /// 编译模式集合（保持原始顺序）
    pub fn compile(&self, patterns: &[UrlPattern]) -> CompiledPatternSet {
        let start = Instant::now();
        let mut stats = CompileStats::default();

        let compiled: Vec<CompiledUrlPattern> = patterns
            .iter()
            .map(|pattern| {
                let compiled = self.compile_pattern(pattern);
                stats.record(&compiled.matcher);
                compiled
            })
            .collect();

        debug!(
            "模式编译完成，耗时{:?}：通配符{}条、正则{}条、无效{}条",
            start.elapsed(),
            stats.wildcard_count,
            stats.regex_count,
            stats.invalid_count
        );

        CompiledPatternSet {
            patterns: compiled.into(),
        }
    }

    fn invalid(&self, pattern: &UrlPattern, reason: String) -> Matcher {
        if self.config.verbose {
            warn!(
                "模式编译失败：id={}，模式={}，原因={}",
                pattern.id,
                preview(&pattern.pattern, PREVIEW_MAX_CHARS),
                reason
            );
        } else {
            debug!("模式编译失败：id={}，原因={}", pattern.id, reason);
        }
        Matcher::Invalid(reason)
    }
}

/// 编译统计
#[derive(Debug, Default)]
struct CompileStats {
    wildcard_count: usize,
    regex_count: usize,
    invalid_count: usize,
}

impl CompileStats {
    fn record(&mut self, matcher: &Matcher) {
        match matcher {
            Matcher::Wildcard(_) => self.wildcard_count += 1,
            Matcher::Regex(_) => self.regex_count += 1,
            Matcher::Invalid(_) => self.invalid_count += 1,
        }
    }
}
