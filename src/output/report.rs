//! 扫描报告：命中记录汇总与结果文件输出

use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RwsResult;
use crate::rule::Framework;
use crate::target::WorkItem;

/// 单条命中记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanHit {
    pub address: Ipv4Addr,
    pub port: u16,
    pub framework: Framework,
    pub evidence: String,
}

impl ScanHit {
    pub fn new(item: WorkItem, framework: Framework, evidence: impl Into<String>) -> Self {
        Self {
            address: item.address,
            port: item.port,
            framework,
            evidence: evidence.into(),
        }
    }

    pub fn url(&self) -> String {
        WorkItem::new(self.address, self.port).url()
    }
}

/// 被跳过的无效网段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRange {
    pub range: String,
    pub reason: String,
}

/// 扫描报告
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    pub hits: Vec<ScanHit>,
    pub rejected_ranges: Vec<RejectedRange>,
    // 实际下发的扫描任务数
    pub dispatched: u64,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// 命中URL列表（顺序无保证）
    pub fn urls(&self) -> Vec<String> {
        self.hits.iter().map(ScanHit::url).collect()
    }

    /// 命中URL集合，用于与顺序无关的比较
    pub fn url_set(&self) -> BTreeSet<String> {
        self.hits.iter().map(ScanHit::url).collect()
    }

    /// 写出URL结果文件（每行一个URL），没有命中时不创建文件
    ///
    /// 返回是否写出了文件。
    pub async fn write_urls(&self, path: &Path) -> RwsResult<bool> {
        if self.is_empty() {
            return Ok(false);
        }

        let mut content = String::new();
        for url in self.urls() {
            content.push_str(&url);
            content.push('\n');
        }

        tokio::fs::write(path, content).await?;
        debug!("结果文件写入完成：{}，共 {} 条", path.display(), self.hits.len());
        Ok(true)
    }

    /// 写出JSON格式的详细报告
    pub async fn write_json(&self, path: &Path) -> RwsResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(last: u8, port: u16, framework: Framework) -> ScanHit {
        ScanHit::new(WorkItem::new(Ipv4Addr::new(10, 0, 0, last), port), framework, "Path: /")
    }

    #[test]
    fn test_urls() {
        let report = ScanReport {
            hits: vec![hit(1, 3000, Framework::NextJs), hit(2, 80, Framework::React)],
            ..Default::default()
        };
        assert_eq!(report.urls(), vec!["http://10.0.0.1:3000", "http://10.0.0.2:80"]);
        assert_eq!(report.url_set().len(), 2);
    }

    #[tokio::test]
    async fn test_write_urls_skips_empty_report() {
        let path = std::env::temp_dir().join(format!("rswebscan-empty-{}.txt", std::process::id()));
        let _ = tokio::fs::remove_file(&path).await;

        let written = ScanReport::default().write_urls(&path).await.unwrap();
        assert!(!written);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_write_urls_overwrites() {
        let path = std::env::temp_dir().join(format!("rswebscan-report-{}.txt", std::process::id()));
        tokio::fs::write(&path, "stale content\nmore\nlines\n").await.unwrap();

        let report = ScanReport {
            hits: vec![hit(1, 3000, Framework::NextJs)],
            ..Default::default()
        };
        assert!(report.write_urls(&path).await.unwrap());
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "http://10.0.0.1:3000\n");

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_write_json() {
        let path = std::env::temp_dir().join(format!("rswebscan-report-{}.json", std::process::id()));
        let report = ScanReport {
            hits: vec![hit(1, 3000, Framework::NextJs)],
            dispatched: 4,
            ..Default::default()
        };
        report.write_json(&path).await.unwrap();

        let parsed: ScanReport = serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
        assert_eq!(parsed.hits, report.hits);
        assert_eq!(parsed.dispatched, 4);

        let _ = tokio::fs::remove_file(&path).await;
    }
}
