//! 扫描任务：地址 × 端口 的笛卡尔积

use std::fmt;
use std::net::Ipv4Addr;

use super::expander::NetworkRange;

/// 单个扫描任务
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkItem {
    pub address: Ipv4Addr,
    pub port: u16,
}

impl WorkItem {
    pub fn new(address: Ipv4Addr, port: u16) -> Self {
        Self { address, port }
    }

    /// 结果文件中记录的URL
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.address, self.port)
    }
}

impl fmt::Display for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}

/// 工作集：所有网段的主机 × 端口
///
/// 构建时一次性去重：各网段的主机区间排序后合并重叠部分，端口排序去重。
/// 遍历阶段惰性生成，不保存已下发的任务。
pub struct WorkSet {
    // 互不重叠的主机区间（u32表示，闭区间，按起点升序）
    spans: Vec<(u32, u32)>,
    ports: Vec<u16>,
}

impl WorkSet {
    pub fn new(ranges: &[NetworkRange], ports: &[u16]) -> Self {
        let mut bounds: Vec<(u32, u32)> = ranges.iter().map(NetworkRange::host_bounds).collect();
        bounds.sort_unstable();

        let mut spans: Vec<(u32, u32)> = Vec::with_capacity(bounds.len());
        for (start, end) in bounds {
            match spans.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => spans.push((start, end)),
            }
        }

        let mut ports = ports.to_vec();
        ports.sort_unstable();
        ports.dedup();

        Self { spans, ports }
    }

    /// 去重后的任务总数
    pub fn item_count(&self) -> u64 {
        let hosts: u64 = self
            .spans
            .iter()
            .map(|(start, end)| u64::from(end - start) + 1)
            .sum();
        hosts * self.ports.len() as u64
    }

    pub fn iter(&self) -> impl Iterator<Item = WorkItem> + '_ {
        let ports = &self.ports;

        self.spans
            .iter()
            .flat_map(|&(start, end)| (start..=end).map(Ipv4Addr::from))
            .flat_map(move |address| ports.iter().map(move |&port| WorkItem::new(address, port)))
    }
}
