//! 识别结论

use crate::rule::Framework;

/// 单个扫描任务的识别结论
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionVerdict {
    Matched { framework: Framework, evidence: String },
    NoMatch,
}

impl DetectionVerdict {
    pub fn matched(framework: Framework, evidence: impl Into<String>) -> Self {
        DetectionVerdict::Matched {
            framework,
            evidence: evidence.into(),
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, DetectionVerdict::Matched { .. })
    }

    pub fn framework(&self) -> Option<Framework> {
        match self {
            DetectionVerdict::Matched { framework, .. } => Some(*framework),
            DetectionVerdict::NoMatch => None,
        }
    }
}
