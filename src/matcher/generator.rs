//! 模式辅助工具
//! 模式类型推断、从当前URL生成通配符模式

use tracing::debug;
use url::Url;

use crate::error::PmResult;
use crate::rule::PatternType;
use crate::utils::{preview, PREVIEW_MAX_CHARS};

/// 正则特有字符（出现任一即推断为正则）
/// `*` 与 `.` 不在其中：`*` 是通配符自身的语法
const REGEX_HINT_CHARS: &[char] = &['^', '$', '+', '?', '{', '}', '(', ')', '|', '[', ']', '\\'];

/// 推断模式类型（仅用于界面默认选项，不影响实际匹配）
pub fn infer_pattern_type(pattern: &str) -> PatternType {
    if pattern.contains(REGEX_HINT_CHARS) {
        PatternType::Regex
    } else {
        PatternType::Wildcard
    }
}

/// 从绝对URL生成通配符模式，解析失败时返回 Err
/// 无路径段：`origin/*`；否则将最后一段替换为 `*`
pub fn try_generate_pattern_from_url(url: &str) -> PmResult<String> {
    let parsed = Url::parse(url)?;
    let mut pattern = parsed.origin().ascii_serialization();

    let segments: Vec<&str> = parsed.path().split('/').filter(|s| !s.is_empty()).collect();
    pattern.push('/');
    if let Some((_, parents)) = segments.split_last() {
        for segment in parents {
            pattern.push_str(segment);
            pattern.push('/');
        }
    }
    pattern.push('*');

    Ok(pattern)
}

/// 从绝对URL生成通配符模式
/// 解析失败时原样返回输入（调用方可比较输入输出判断是否生成成功）
pub fn generate_pattern_from_url(url: &str) -> String {
    match try_generate_pattern_from_url(url) {
        Ok(pattern) => pattern,
        Err(e) => {
            debug!("URL解析失败，保持原样：url={}，原因={}", preview(url, PREVIEW_MAX_CHARS), e);
            url.to_string()
        }
    }
}
