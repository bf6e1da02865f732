//! 规则数据模型
//! 每个框架的识别规则是一组有序的探测步骤，每个步骤对应一次HTTP请求和若干信号检查

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pattern::Condition;

/// 可识别的Web框架
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Framework {
    #[serde(rename = "Next.js")]
    NextJs,
    Dify,
    React,
}

impl Framework {
    pub fn name(&self) -> &'static str {
        match self {
            Framework::NextJs => "Next.js",
            Framework::Dify => "Dify",
            Framework::React => "React",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 单个信号检查：条件 + 命中时的证据描述
///
/// 证据模板中的 `{path}` 会替换为当前探测路径。
#[derive(Debug, Clone)]
pub struct SignalCheck {
    pub condition: Condition,
    pub evidence: String,
}

impl SignalCheck {
    pub fn new(condition: Condition, evidence: impl Into<String>) -> Self {
        Self {
            condition,
            evidence: evidence.into(),
        }
    }

    /// 生成证据文本
    pub fn render_evidence(&self, path: &str) -> String {
        self.evidence.replace("{path}", path)
    }
}

/// 探测步骤：一次GET请求，按顺序执行其上的检查
#[derive(Debug, Clone)]
pub struct ProbeStep {
    pub path: String,
    pub checks: Vec<SignalCheck>,
}

impl ProbeStep {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            checks: Vec::new(),
        }
    }

    pub fn check(mut self, condition: Condition, evidence: impl Into<String>) -> Self {
        self.checks.push(SignalCheck::new(condition, evidence));
        self
    }

    /// 为每个路径生成一个步骤，共用同一条件与证据模板
    pub fn for_paths(paths: &[&str], condition: &Condition, evidence: &str) -> Vec<Self> {
        paths
            .iter()
            .map(|path| Self::new(*path).check(condition.clone(), evidence))
            .collect()
    }
}

/// 单个框架的完整识别规则
#[derive(Debug, Clone)]
pub struct FrameworkRule {
    pub framework: Framework,
    pub steps: Vec<ProbeStep>,
}

impl FrameworkRule {
    pub fn new(framework: Framework) -> Self {
        Self {
            framework,
            steps: Vec::new(),
        }
    }

    pub fn step(mut self, step: ProbeStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(mut self, steps: impl IntoIterator<Item = ProbeStep>) -> Self {
        self.steps.extend(steps);
        self
    }
}
