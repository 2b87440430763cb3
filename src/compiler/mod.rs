//! 编译模块：将URL模式编译为可执行的匹配器（通配符片段匹配/正则）
pub mod pattern;
pub mod compiler;
pub mod wildcard;

pub use self::pattern::{CompiledPatternSet, CompiledUrlPattern, Matcher};
pub use self::compiler::PatternCompiler;
pub use self::wildcard::{WildcardMatcher, wildcard_match};
