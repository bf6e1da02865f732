//! 网段展开器：将CIDR网段展开为可扫描的主机地址序列

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use ipnetwork::Ipv4Network;

use crate::error::{RswebscanError, RwsResult};

/// 已解析的IPv4网段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkRange {
    network: Ipv4Network,
}

impl NetworkRange {
    /// 解析CIDR字符串（不带前缀的单个地址按 /32 处理）
    pub fn parse(cidr: &str) -> RwsResult<Self> {
        let trimmed = cidr.trim();
        let parsed = Ipv4Network::from_str(trimmed)
            .map_err(|e| RswebscanError::invalid_range(trimmed, e))?;

        // 主机位不为0时归一化到所在网段
        let network = Ipv4Network::new(parsed.network(), parsed.prefix())
            .map_err(|e| RswebscanError::invalid_range(trimmed, e))?;

        Ok(Self { network })
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    pub fn network_addr(&self) -> Ipv4Addr {
        self.network.network()
    }

    pub fn broadcast_addr(&self) -> Ipv4Addr {
        self.network.broadcast()
    }

    /// 可扫描主机的地址区间（u32表示）
    ///
    /// /31 与 /32 不存在独立的网络/广播地址，全部地址都视为主机；
    /// 其余网段剔除网络地址和广播地址。
    pub(crate) fn host_bounds(&self) -> (u32, u32) {
        let start = u32::from(self.network.network());
        let end = u32::from(self.network.broadcast());
        if self.network.prefix() >= 31 {
            (start, end)
        } else {
            (start + 1, end - 1)
        }
    }

    /// 惰性遍历网段内的主机地址
    pub fn hosts(&self) -> impl Iterator<Item = Ipv4Addr> + use<> {
        let (start, end) = self.host_bounds();
        (start..=end).map(Ipv4Addr::from)
    }

    /// 网段内的主机数量
    pub fn host_count(&self) -> u64 {
        let (start, end) = self.host_bounds();
        u64::from(end - start) + 1
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.network.contains(addr)
    }
}

impl fmt::Display for NetworkRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network.network(), self.network.prefix())
    }
}

impl FromStr for NetworkRange {
    type Err = RswebscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// 网段展开器
pub struct TargetExpander;

impl TargetExpander {
    /// 将CIDR字符串展开为主机地址序列
    pub fn expand(cidr: &str) -> RwsResult<impl Iterator<Item = Ipv4Addr>> {
        Ok(NetworkRange::parse(cidr)?.hosts())
    }
}
