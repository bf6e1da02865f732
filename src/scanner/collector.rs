//! 并发任务共享的命中结果收集器

use std::sync::Mutex;

use crate::output::ScanHit;

/// 线程安全的命中结果收集器
#[derive(Debug, Default)]
pub struct ResultCollector {
    hits: Mutex<Vec<ScanHit>>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, hit: ScanHit) {
        // 持锁期间不会panic，中毒时直接沿用内部数据
        let mut hits = self.hits.lock().unwrap_or_else(|e| e.into_inner());
        hits.push(hit);
    }

    /// 取出全部结果，收集器随后为空
    pub fn take_hits(&self) -> Vec<ScanHit> {
        let mut hits = self.hits.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *hits)
    }
}
