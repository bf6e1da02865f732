//! 检测模块：框架检测器与分类器
pub mod classifier;
pub mod detector;
pub mod verdict;

// 导出核心接口
pub use self::classifier::Classifier;
pub use self::detector::Detector;
pub use self::verdict::DetectionVerdict;
