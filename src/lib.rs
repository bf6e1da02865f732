//! rswebscan - 网段批量探测与 Next.js / Dify / React 服务指纹识别

// 导出全局错误类型
pub use self::error::{RswebscanError, RwsResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, ScanConfig};

// 导出目标模块核心接口
pub use self::target::{NetworkRange, RangeLoader, TargetExpander, WorkItem, WorkSet};

// 导出探测模块核心接口
pub use self::probe::{HttpProbeClient, ProbeClient, ProbeFailure, ProbeResponse, ProbeResult};

// 导出规则模块核心接口
pub use self::rule::{Condition, Framework, FrameworkRule, Matcher, ProbeStep, RuleLibrary};

// 导出检测模块核心接口
pub use self::detector::{Classifier, DetectionVerdict, Detector};

// 导出扫描与输出模块核心接口
pub use self::scanner::Scanner;
pub use self::output::{RejectedRange, ScanHit, ScanReport};

// 导出工具模块核心接口
pub use self::utils::HeaderConverter;

// 声明所有子模块
pub mod config;
pub mod error;
pub mod target;
pub mod probe;
pub mod rule;
pub mod detector;
pub mod scanner;
pub mod output;
pub mod utils;
