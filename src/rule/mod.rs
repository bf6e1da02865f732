//! 规则模块：框架指纹的数据模型、匹配模式与内置规则表
pub mod model;
pub mod pattern;
pub mod library;

// 导出核心接口
pub use self::model::{Framework, FrameworkRule, ProbeStep, SignalCheck};
pub use self::pattern::{Condition, MatchInput, Matcher};
pub use self::library::{RuleLibrary, DIFY_PATHS, NEXT_PATHS, REACT_PATHS};
