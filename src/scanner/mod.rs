//! 扫描模块：工作集调度与结果收集
pub mod collector;
pub mod scanner;

pub use self::collector::ResultCollector;
pub use self::scanner::{HitCallback, Scanner};
