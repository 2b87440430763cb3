//! 日志输出格式化工具
//! URL/模式文本可能很长，日志中只保留前若干字符

use std::borrow::Cow;
use std::fmt::Write;

use crate::rule::UrlPattern;

/// 日志中单段文本的默认最大长度（字符数）
pub const PREVIEW_MAX_CHARS: usize = 80;

/// 截断过长文本，超长部分以省略号代替；未超长时零拷贝返回
pub fn preview(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        None => Cow::Borrowed(s),
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + 3);
            out.push_str(&s[..cut]);
            out.push('…');
            Cow::Owned(out)
        }
    }
}

/// 模式ID列表日志格式化
/// 格式：[id1, id2, ...] (total: N)
pub fn summarize_ids<'a, I>(patterns: I) -> String
where
    I: IntoIterator<Item = &'a UrlPattern>,
{
    const MAX_COUNT: usize = 10; // 最多显示10个ID
    const MAX_ID_LEN: usize = 24;

    let mut result = String::from("[");
    let mut total = 0usize;
    for pattern in patterns {
        if total < MAX_COUNT {
            if total > 0 {
                result.push_str(", ");
            }
            result.push_str(&preview(&pattern.id, MAX_ID_LEN));
        }
        total += 1;
    }

    if total == 0 {
        return "[empty]".to_string();
    }
    if total > MAX_COUNT {
        result.push_str(", …");
    }
    result.push(']');
    // 写入String不会失败
    let _ = write!(result, " (total: {})", total);
    result
}
