//! 规则模块：URL模式数据模型、记录加载与预设合并
pub mod model;
pub mod loader;

// 导出核心接口
pub use self::model::{PatternType, PatternRule, UrlPattern, is_blank};
pub use self::loader::{PatternLoader, MergeOutcome, merge_presets, PRESETS_FIELD};
