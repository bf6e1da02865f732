//! 分类器：按固定优先级依次运行各框架检测器

use std::net::Ipv4Addr;
use std::sync::Arc;

use super::detector::Detector;
use super::verdict::DetectionVerdict;
use crate::error::RwsResult;
use crate::probe::ProbeClient;
use crate::rule::{Framework, RuleLibrary};

/// 框架分类器
#[derive(Clone)]
pub struct Classifier {
    client: Arc<dyn ProbeClient>,
    library: Arc<RuleLibrary>,
}

impl Classifier {
    /// 使用内置规则库创建分类器
    pub fn new(client: Arc<dyn ProbeClient>) -> RwsResult<Self> {
        Ok(Self::with_library(client, RuleLibrary::builtin()?))
    }

    /// 使用自定义规则库创建分类器（规则顺序即优先级）
    pub fn with_library(client: Arc<dyn ProbeClient>, library: RuleLibrary) -> Self {
        Self {
            client,
            library: Arc::new(library),
        }
    }

    /// 获取单个框架的检测器
    pub fn detector(&self, framework: Framework) -> Option<Detector<'_>> {
        self.library
            .get(framework)
            .map(|rule| Detector::new(rule, self.client.as_ref()))
    }

    /// 识别目标，返回第一个命中的框架
    pub async fn classify(&self, address: Ipv4Addr, port: u16) -> DetectionVerdict {
        for rule in &self.library.rules {
            let verdict = Detector::new(rule, self.client.as_ref()).detect(address, port).await;
            if verdict.is_match() {
                return verdict;
            }
        }
        DetectionVerdict::NoMatch
    }
}
