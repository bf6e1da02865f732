//! 扫描调度：展开工作集，在并发上限内分发识别任务并汇总命中结果

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use super::collector::ResultCollector;
use crate::config::ScanConfig;
use crate::detector::{Classifier, DetectionVerdict};
use crate::error::RwsResult;
use crate::output::{RejectedRange, ScanHit, ScanReport};
use crate::probe::{HttpProbeClient, ProbeClient};
use crate::target::{NetworkRange, WorkItem, WorkSet};

/// 命中回调，每发现一个服务调用一次
pub type HitCallback = Arc<dyn Fn(&ScanHit) + Send + Sync>;

/// 扫描器
pub struct Scanner {
    config: ScanConfig,
    classifier: Classifier,
    on_hit: Option<HitCallback>,
}

impl Scanner {
    /// 使用reqwest探测客户端创建扫描器
    pub fn new(config: ScanConfig) -> RwsResult<Self> {
        config.validate()?;
        let client = HttpProbeClient::new(config.http_timeout)?;
        Self::with_client(config, Arc::new(client))
    }

    /// 使用自定义探测客户端创建扫描器
    pub fn with_client(config: ScanConfig, client: Arc<dyn ProbeClient>) -> RwsResult<Self> {
        Ok(Self::with_classifier(config, Classifier::new(client)?))
    }

    pub fn with_classifier(config: ScanConfig, classifier: Classifier) -> Self {
        Self {
            config,
            classifier,
            on_hit: None,
        }
    }

    /// 注册命中回调
    pub fn on_hit(mut self, callback: impl Fn(&ScanHit) + Send + Sync + 'static) -> Self {
        self.on_hit = Some(Arc::new(callback));
        self
    }

    /// 解析网段字符串，无效网段单独记录，不影响其他网段
    pub fn parse_ranges<S: AsRef<str>>(raw: &[S]) -> (Vec<NetworkRange>, Vec<RejectedRange>) {
        let mut ranges = Vec::new();
        let mut rejected = Vec::new();

        for entry in raw {
            let entry = entry.as_ref();
            match NetworkRange::parse(entry) {
                Ok(range) => ranges.push(range),
                Err(e) => {
                    warn!("跳过无效网段：{}", e);
                    rejected.push(RejectedRange {
                        range: entry.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        (ranges, rejected)
    }

    /// 扫描网段字符串列表
    pub async fn scan<S: AsRef<str>>(&self, raw_ranges: &[S]) -> ScanReport {
        let (ranges, rejected) = Self::parse_ranges(raw_ranges);
        let mut report = self.scan_ranges(&ranges).await;
        report.rejected_ranges = rejected;
        report
    }

    /// 扫描已解析的网段
    ///
    /// 先获取信号量许可再创建任务，进行中的识别任务数始终不超过并发上限。
    /// 单个任务的失败或panic不会中断整体扫描。
    pub async fn scan_ranges(&self, ranges: &[NetworkRange]) -> ScanReport {
        for range in ranges {
            info!("开始扫描网段：{}（{} 个主机）", range, range.host_count());
        }

        let work_set = WorkSet::new(ranges, &self.config.ports);
        debug!(
            "工作集共 {} 个任务，并发上限 {}",
            work_set.item_count(),
            self.config.concurrency
        );

        let semaphore = Arc::new(Semaphore::new(self.config.concurrency));
        let collector = Arc::new(ResultCollector::new());
        let mut tasks = JoinSet::new();
        let mut dispatched: u64 = 0;

        for item in work_set.iter() {
            let Ok(permit) = semaphore.clone().acquire_owned().await else {
                break;
            };

            let classifier = self.classifier.clone();
            let collector = collector.clone();
            let on_hit = self.on_hit.clone();

            tasks.spawn(async move {
                let _permit = permit; // 任务结束自动释放许可
                Self::classify_item(&classifier, item, &collector, on_hit.as_ref()).await;
            });
            dispatched += 1;

            // 及时回收已完成的任务
            while let Some(joined) = tasks.try_join_next() {
                if let Err(e) = joined {
                    warn!("识别任务异常退出：{}", e);
                }
            }
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!("识别任务异常退出：{}", e);
            }
        }

        let mut hits = collector.take_hits();
        hits.sort_by_key(|hit| (hit.address, hit.port));

        info!("扫描完成：下发 {} 个任务，识别到 {} 个服务", dispatched, hits.len());

        ScanReport {
            hits,
            rejected_ranges: Vec::new(),
            dispatched,
        }
    }

    async fn classify_item(
        classifier: &Classifier,
        item: WorkItem,
        collector: &ResultCollector,
        on_hit: Option<&HitCallback>,
    ) {
        let DetectionVerdict::Matched { framework, evidence } =
            classifier.classify(item.address, item.port).await
        else {
            return;
        };

        let hit = ScanHit::new(item, framework, evidence);
        debug!("[✔] {}  →  {} ({})", hit.url(), hit.framework, hit.evidence);
        if let Some(callback) = on_hit {
            callback(&hit);
        }
        collector.push(hit);
    }
}
