//! 工具模块
pub mod log_format;

pub use self::log_format::{preview, summarize_ids, PREVIEW_MAX_CHARS};
