//! 通配符匹配器
//! 按 `*` 拆分为字面片段直接匹配，不经过正则编译，任意长度的输入都不会失败

/// 通配符匹配器：`*` 匹配任意字符序列（含空串与换行），其余字符按字面匹配，全字符串锚定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardMatcher {
    pattern: String,
    // 按 `*` 拆分后的字面片段，长度 = `*` 个数 + 1
    pieces: Vec<String>,
}

impl WildcardMatcher {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            pieces: pattern.split('*').map(str::to_string).collect(),
        }
    }

    /// 原始模式文本
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn is_match(&self, input: &str) -> bool {
        is_wildcard_match(&self.pieces, input)
    }
}

/// 不保存片段的单次匹配
pub fn wildcard_match(pattern: &str, input: &str) -> bool {
    let pieces: Vec<&str> = pattern.split('*').collect();
    is_wildcard_match(&pieces, input)
}

/// 首片段前缀匹配、末片段后缀匹配，中间片段在剩余区间内依次取最左出现位置
fn is_wildcard_match<S: AsRef<str>>(pieces: &[S], input: &str) -> bool {
    let (first, rest) = match pieces.split_first() {
        Some(split) => split,
        None => return input.is_empty(),
    };
    let first = first.as_ref();

    // 无 `*`：整串相等
    let Some((last, middle)) = rest.split_last() else {
        return input == first;
    };
    let last = last.as_ref();

    if input.len() < first.len() + last.len()
        || !input.starts_with(first)
        || !input.ends_with(last)
    {
        return false;
    }

    // 前缀与后缀之间的区间，边界均落在字符边界上
    let mut remaining = &input[first.len()..input.len() - last.len()];
    for piece in middle {
        let piece = piece.as_ref();
        match remaining.find(piece) {
            Some(pos) => remaining = &remaining[pos + piece.len()..],
            None => return false,
        }
    }
    true
}
