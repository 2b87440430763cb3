//! 匹配模块：URL匹配、模式校验、类型推断、模式生成与可见性过滤
pub mod url_matcher;
pub mod generator;
pub mod visibility;

// 导出核心接口
pub use self::url_matcher::{
    match_wildcard,
    match_regex,
    match_url_pattern,
    match_any_url_pattern,
    find_matching_patterns,
    is_valid_regex,
    is_valid_url_pattern,
};
pub use self::generator::{
    infer_pattern_type,
    generate_pattern_from_url,
    try_generate_pattern_from_url,
};
pub use self::visibility::{HasUrlPatterns, is_visible, filter_visible};
