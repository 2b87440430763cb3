//! URL匹配与模式校验
//! 所有函数均为纯函数：无副作用、不抛错，失败以布尔值表达

use once_cell::sync::Lazy;
use tracing::debug;

use crate::compiler::{wildcard_match, PatternCompiler};
use crate::config::MatcherConfig;
use crate::rule::{PatternRule, UrlPattern};
use crate::utils::{preview, PREVIEW_MAX_CHARS};

/// 单次匹配使用的默认配置（只读）
static DEFAULT_CONFIG: Lazy<MatcherConfig> = Lazy::new(MatcherConfig::default);

// ======================== 匹配 ========================

/// 通配符匹配（全字符串锚定）
/// `*` 匹配任意字符序列（含空串），其余字符按字面匹配
pub fn match_wildcard(url: &str, pattern: &str) -> bool {
    wildcard_match(pattern, url)
}

/// 正则匹配（非锚定，需要全匹配时由作者自行添加 `^`/`$`）
/// 正则无效时返回 false
pub fn match_regex(url: &str, pattern: &str) -> bool {
    match PatternCompiler::build_regex(pattern, &DEFAULT_CONFIG) {
        Ok(regex) => regex.is_match(url),
        Err(e) => {
            debug!(
                "正则无效，视为不匹配：模式={}，原因={}",
                preview(pattern, PREVIEW_MAX_CHARS),
                e
            );
            false
        }
    }
}

/// 按模式类型分派匹配
pub fn match_url_pattern(url: &str, pattern: &UrlPattern) -> bool {
    match pattern.rule() {
        PatternRule::Wildcard(text) => match_wildcard(url, text),
        PatternRule::Regex(text) => match_regex(url, text),
    }
}

/// 任一模式匹配即返回 true，空集合返回 false
pub fn match_any_url_pattern(url: &str, patterns: &[UrlPattern]) -> bool {
    patterns.iter().any(|pattern| match_url_pattern(url, pattern))
}

/// 返回所有匹配的模式（保持原始顺序，不去重）
pub fn find_matching_patterns<'a>(url: &str, patterns: &'a [UrlPattern]) -> Vec<&'a UrlPattern> {
    patterns
        .iter()
        .filter(|pattern| match_url_pattern(url, pattern))
        .collect()
}

// ======================== 校验 ========================

/// 正则语法是否有效
pub fn is_valid_regex(pattern: &str) -> bool {
    PatternCompiler::build_regex(pattern, &DEFAULT_CONFIG).is_ok()
}

/// 模式记录是否有效：非空白，且正则类型必须可编译
pub fn is_valid_url_pattern(pattern: &UrlPattern) -> bool {
    if pattern.is_blank() {
        return false;
    }

    match pattern.rule() {
        PatternRule::Regex(text) => is_valid_regex(text),
        // 通配符按字面片段匹配，不存在编译失败
        PatternRule::Wildcard(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_patterns() -> Vec<UrlPattern> {
        vec![
            UrlPattern::wildcard("1", "https://example.com/*"),
            UrlPattern::wildcard("2", "https://example.com/specific/*"),
            UrlPattern::wildcard("3", "https://other.com/*"),
        ]
    }

    #[test]
    fn test_wildcard_exact_and_universal() {
        let urls = [
            "https://example.com/page",
            "",
            "https://example.com/a+b(c)|[d]{e}$^\\",
            "line\nbreak",
        ];
        for url in urls {
            // 任意字符串都是自身的模式，"*" 匹配一切
            assert!(match_wildcard(url, url), "self match failed: {:?}", url);
            assert!(match_wildcard(url, "*"), "universal match failed: {:?}", url);
        }
    }

    #[test]
    fn test_wildcard_positions() {
        assert!(match_wildcard("https://example.com/path/to/page", "https://example.com/*"));
        assert!(match_wildcard(
            "https://example.com/users/123/profile",
            "https://example.com/users/*/profile"
        ));
        assert!(match_wildcard("https://example.com/a/b/c/d", "https://example.com/*/*/c/*"));
        assert!(!match_wildcard("https://example.com/other", "https://example.com/page"));
    }

    #[test]
    fn test_wildcard_is_anchored() {
        // 测试场景：通配符要求全字符串匹配，而非子串匹配
        assert!(!match_wildcard("https://example.com/page/extra", "https://example.com/page"));
        assert!(!match_wildcard("prefix-https://example.com/", "https://example.com/*"));
    }

    #[test]
    fn test_wildcard_escapes_special_characters() {
        assert!(match_wildcard(
            "https://example.com/page?query=1",
            "https://example.com/page?query=*"
        ));
        // `.` 和 `?` 按字面匹配
        assert!(!match_wildcard("https://exampleXcom/", "https://example.com/"));
        assert!(!match_wildcard("https://example.com/pag", "https://example.com/page?"));
    }

    #[test]
    fn test_large_wildcard_is_its_own_pattern() {
        // 测试场景：超长文本（如 data: URL）作为自身的模式仍然匹配，且与有效性结论一致
        for kb in [512usize, 2048] {
            let text = "a".repeat(kb * 1024);
            let with_star = format!("{}*", text);

            assert!(match_wildcard(&text, &text), "{} KiB", kb);
            assert!(match_wildcard(&text, &with_star), "{} KiB", kb);
            let pattern = UrlPattern::wildcard("big", with_star);
            assert!(is_valid_url_pattern(&pattern));
            assert!(match_url_pattern(&text, &pattern));
        }
    }

    #[test]
    fn test_empty_wildcard_matches_only_empty() {
        assert!(match_wildcard("", ""));
        assert!(!match_wildcard("a", ""));
    }

    #[test]
    fn test_regex_matching() {
        let pattern = r"^https://example\.com/users/\d+$";
        assert!(match_regex("https://example.com/users/123", pattern));
        assert!(!match_regex("https://example.com/users/abc", pattern));
    }

    #[test]
    fn test_regex_is_unanchored() {
        assert!(match_regex("https://example.com/docs/intro", "docs"));
    }

    #[test]
    fn test_invalid_regex_returns_false() {
        assert!(!match_regex("https://example.com", "[[invalid"));
        assert!(!match_regex("[[invalid", "[[invalid"));
    }

    #[test]
    fn test_match_url_pattern_dispatch() {
        let wildcard = UrlPattern::wildcard("1", "https://example.com/*");
        let regex = UrlPattern::regex("1", r"^https://example\.com/\d+$");
        assert!(match_url_pattern("https://example.com/page", &wildcard));
        assert!(match_url_pattern("https://example.com/123", &regex));

        // 测试场景：同一文本，类型不同则结果不同
        let as_wildcard = UrlPattern::wildcard("w", "example");
        let as_regex = UrlPattern::regex("r", "example");
        assert!(!match_url_pattern("https://example.com/", &as_wildcard));
        assert!(match_url_pattern("https://example.com/", &as_regex));
    }

    #[test]
    fn test_match_any() {
        let patterns = vec![
            UrlPattern::wildcard("1", "https://example.com/*"),
            UrlPattern::wildcard("2", "https://other.com/*"),
        ];
        assert!(match_any_url_pattern("https://example.com/page", &patterns));
        assert!(!match_any_url_pattern("https://nomatch.com/page", &patterns));
        assert!(!match_any_url_pattern("https://example.com", &[]));
        assert!(!match_any_url_pattern("", &[]));
    }

    #[test]
    fn test_find_matching_preserves_order() {
        let patterns = three_patterns();
        let result = find_matching_patterns("https://example.com/specific/page", &patterns);

        assert_eq!(result, vec![&patterns[0], &patterns[1]]);
        assert!(find_matching_patterns("https://nomatch.com", &patterns).is_empty());
    }

    #[test]
    fn test_find_matching_keeps_duplicates() {
        let pattern = UrlPattern::wildcard("dup", "https://example.com/*");
        let patterns = vec![pattern.clone(), pattern];
        assert_eq!(find_matching_patterns("https://example.com/x", &patterns).len(), 2);
    }

    #[test]
    fn test_regex_engine_syntax_differences() {
        // 测试场景：花括号需要转义才能按字面匹配
        assert!(!is_valid_regex("/api/{id}"));
        assert!(match_regex("/api/{id}", r"/api/\{id\}"));
        // `\d` 默认匹配 Unicode 数字，`(?-u:\d)` 仅匹配 ASCII 数字
        assert!(match_regex("/p/١٢٣", r"^/p/\d+$"));
        assert!(!match_regex("/p/١٢٣", r"^/p/(?-u:\d)+$"));
        assert!(match_regex("/p/123", r"^/p/(?-u:\d)+$"));
    }

    #[test]
    fn test_regex_validity() {
        assert!(is_valid_regex("^https://.*$"));
        assert!(is_valid_regex(""));
        assert!(!is_valid_regex("[[invalid"));
    }

    #[test]
    fn test_url_pattern_validity() {
        assert!(is_valid_url_pattern(&UrlPattern::wildcard("1", "https://*")));
        assert!(is_valid_url_pattern(&UrlPattern::regex("1", "^https://.*$")));
        assert!(!is_valid_url_pattern(&UrlPattern::regex("1", "[[invalid")));
        assert!(!is_valid_url_pattern(&UrlPattern::wildcard("1", "")));
        assert!(!is_valid_url_pattern(&UrlPattern::wildcard("1", "   ")));
        assert!(!is_valid_url_pattern(&UrlPattern::regex("1", "\t\n")));
        // 通配符中的正则元字符不影响有效性
        assert!(is_valid_url_pattern(&UrlPattern::wildcard("1", "[[invalid")));
        // BOM 与 JS trim() 一致视为空白
        assert!(!is_valid_url_pattern(&UrlPattern::wildcard("1", "\u{FEFF}")));
        assert!(!is_valid_url_pattern(&UrlPattern::regex("1", " \u{FEFF}\t")));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let patterns = three_patterns();
        let url = "https://example.com/specific/page";
        assert_eq!(
            find_matching_patterns(url, &patterns),
            find_matching_patterns(url, &patterns)
        );
        assert_eq!(match_regex(url, "specific"), match_regex(url, "specific"));
    }
}
