//! 检测器：按规则表顺序执行探测步骤，首个命中的信号即为结论

use std::net::Ipv4Addr;

use tracing::debug;

use super::verdict::DetectionVerdict;
use crate::probe::{ProbeClient, ProbeResult};
use crate::rule::{FrameworkRule, MatchInput};

/// 单框架检测器
pub struct Detector<'a> {
    rule: &'a FrameworkRule,
    client: &'a dyn ProbeClient,
}

impl<'a> Detector<'a> {
    pub fn new(rule: &'a FrameworkRule, client: &'a dyn ProbeClient) -> Self {
        Self { rule, client }
    }

    /// 检测目标是否运行该框架
    ///
    /// 步骤按顺序执行，命中后不再发起后续请求；
    /// 单个步骤请求失败只意味着该步骤没有证据，继续下一步。
    pub async fn detect(&self, address: Ipv4Addr, port: u16) -> DetectionVerdict {
        let framework = self.rule.framework;

        for step in &self.rule.steps {
            let response = match self.client.fetch(address, port, &step.path).await {
                ProbeResult::Success(response) => response,
                ProbeResult::Failure(failure) => {
                    debug!("{} 检测步骤 {} 无响应：{}:{}，{}", framework, step.path, address, port, failure);
                    continue;
                }
            };

            let body = MatchInput::new(&response.body);
            for check in &step.checks {
                if check.condition.is_match(&response, &body) {
                    let evidence = check.render_evidence(&step.path);
                    debug!("{} 匹配成功：{}:{}，证据={}", framework, address, port, evidence);
                    return DetectionVerdict::matched(framework, evidence);
                }
            }
        }

        DetectionVerdict::NoMatch
    }
}
