//! 全局错误类型定义
//! 匹配/校验本身不抛错（返回布尔值），仅扩展接口使用该错误类型

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum PageMinderError {
    // 模式相关错误
    /// 正则表达式编译失败（语法错误/超出大小限制）
    #[error("Regex compilation failed: {0}")]
    RegexCompileError(#[from] RegexError),
    /// 模式文本为空或仅包含空白
    #[error("Pattern text is empty")]
    EmptyPattern,

    // 输入相关错误
    /// URL解析失败（非绝对URL/格式错误）
    #[error("URL parse failed: {0}")]
    UrlError(#[from] UrlParseError),
    /// 模式记录JSON解析失败
    #[error("JSON parse failed: {0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type PmResult<T> = Result<T, PageMinderError>;
