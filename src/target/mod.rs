//! 目标模块：网段解析、主机展开与扫描任务生成
pub mod expander;
pub mod loader;
pub mod work_item;

pub use self::expander::{NetworkRange, TargetExpander};
pub use self::loader::RangeLoader;
pub use self::work_item::{WorkItem, WorkSet};
