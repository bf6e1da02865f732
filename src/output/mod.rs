//! 输出模块：扫描报告与结果文件
pub mod report;

pub use self::report::{RejectedRange, ScanHit, ScanReport};
