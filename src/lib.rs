//! pageminder - 网页便签的URL模式匹配引擎
//!
//! 根据页面URL判断哪些便签应当显示：通配符/正则匹配、模式校验、
//! 类型推断，以及从当前URL生成通配符模式。

// 导出全局错误类型
pub use self::error::{PageMinderError, PmResult};

// 导出配置模块
pub use self::config::{MatcherConfig, ConfigManager, CustomConfigBuilder, LogLevel};

// 导出规则模块核心接口
pub use self::rule::{
    PatternType, PatternRule, UrlPattern, PatternLoader, MergeOutcome, merge_presets
};

// 导出编译模块核心接口
pub use self::compiler::{
    PatternCompiler, CompiledPatternSet, CompiledUrlPattern, Matcher, WildcardMatcher
};

// 导出匹配模块核心接口
pub use self::matcher::{
    match_wildcard,
    match_regex,
    match_url_pattern,
    match_any_url_pattern,
    find_matching_patterns,
    is_valid_regex,
    is_valid_url_pattern,
    infer_pattern_type,
    generate_pattern_from_url,
    try_generate_pattern_from_url,
    HasUrlPatterns,
    is_visible,
    filter_visible,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod utils;
pub mod compiler;
pub mod matcher;
