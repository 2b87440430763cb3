//! 模式记录加载
//! 负责从JSON（模式数组或扩展导出数据）解析URL模式，以及预设合并

use std::collections::HashSet;
use serde_json::Value;
use tracing::{debug, warn};

use super::model::UrlPattern;
use crate::error::{PageMinderError, PmResult};
use crate::matcher::is_valid_url_pattern;
use crate::utils::{preview, summarize_ids, PREVIEW_MAX_CHARS};

/// 扩展导出数据中存放预设模式的字段名
pub const PRESETS_FIELD: &str = "urlPatternPresets";

/// 模式记录加载器
pub struct PatternLoader;

impl PatternLoader {
    /// 从JSON字符串加载模式列表
    /// 支持两种格式：模式数组，或包含 `urlPatternPresets` 字段的导出对象
    pub fn from_json_str(json: &str) -> PmResult<Vec<UrlPattern>> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// 从JSON值加载模式列表
    pub fn from_json_value(value: Value) -> PmResult<Vec<UrlPattern>> {
        let list = match value {
            Value::Array(_) => value,
            Value::Object(mut map) => match map.remove(PRESETS_FIELD) {
                Some(presets @ Value::Array(_)) => presets,
                Some(_) => {
                    return Err(PageMinderError::InvalidInput(format!(
                        "{} must be an array",
                        PRESETS_FIELD
                    )));
                }
                None => {
                    return Err(PageMinderError::InvalidInput(format!(
                        "object has no {} field",
                        PRESETS_FIELD
                    )));
                }
            },
            other => {
                return Err(PageMinderError::InvalidInput(format!(
                    "expected pattern array or export object, got {}",
                    json_kind(&other)
                )));
            }
        };

        let patterns: Vec<UrlPattern> = serde_json::from_value(list)?;
        debug!("模式记录加载成功，数量：{}", patterns.len());
        Ok(patterns)
    }

    /// 序列化模式列表（格式化JSON）
    pub fn to_json_string(patterns: &[UrlPattern]) -> PmResult<String> {
        Ok(serde_json::to_string_pretty(patterns)?)
    }

    /// 按有效性拆分模式列表：(有效, 无效)
    pub fn partition_valid(patterns: Vec<UrlPattern>) -> (Vec<UrlPattern>, Vec<UrlPattern>) {
        let (valid, invalid): (Vec<_>, Vec<_>) =
            patterns.into_iter().partition(is_valid_url_pattern);

        for pattern in &invalid {
            warn!(
                "忽略无效模式：id={}，类型={}，模式={}",
                pattern.id,
                pattern.kind,
                preview(&pattern.pattern, PREVIEW_MAX_CHARS)
            );
        }
        (valid, invalid)
    }
}

/// 预设合并结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub merged: Vec<UrlPattern>,
    /// 新增的记录数
    pub added: usize,
}

/// 合并预设：保留已有记录，仅追加ID不在已有记录中的新记录
/// 只与已有ID比较，新记录之间的重复ID原样保留
pub fn merge_presets(existing: Vec<UrlPattern>, incoming: Vec<UrlPattern>) -> MergeOutcome {
    let existing_ids: HashSet<String> = existing.iter().map(|p| p.id.clone()).collect();
    let original_len = existing.len();

    let mut merged = existing;
    merged.extend(incoming.into_iter().filter(|p| !existing_ids.contains(&p.id)));

    let added = merged.len() - original_len;
    debug!(
        "预设合并完成，新增{}条：{}",
        added,
        summarize_ids(&merged[original_len..])
    );
    MergeOutcome { merged, added }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
