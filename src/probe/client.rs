//! 探测客户端：对 地址:端口/路径 发起单次带超时的HTTP GET

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::result::{ProbeFailure, ProbeResponse, ProbeResult};
use crate::error::RwsResult;
use crate::utils::HeaderConverter;

/// 探测客户端特质
///
/// 实现方不得向上抛出传输层错误，所有失败都以 `ProbeResult::Failure` 返回。
#[async_trait]
pub trait ProbeClient: Send + Sync {
    async fn fetch(&self, address: Ipv4Addr, port: u16, path: &str) -> ProbeResult;
}

/// 构建探测URL（固定使用 http）
pub fn probe_url(address: Ipv4Addr, port: u16, path: &str) -> RwsResult<Url> {
    let base = Url::parse(&format!("http://{}:{}/", address, port))?;
    Ok(base.join(path)?)
}

/// 基于reqwest的探测客户端
#[derive(Debug, Clone)]
pub struct HttpProbeClient {
    client: Client,
}

impl HttpProbeClient {
    /// 创建客户端，所有请求共享同一连接池与超时配置
    ///
    /// 扫描目标是内网地址，直连探测，不读取环境变量中的代理配置。
    pub fn new(timeout: Duration) -> RwsResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()?;
        Ok(Self { client })
    }

    async fn send(&self, url: Url) -> Result<ProbeResponse, ProbeFailure> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let headers = HeaderConverter::normalize(response.headers());
        let body = response.text().await?;

        Ok(ProbeResponse::new(status, headers, body))
    }
}

#[async_trait]
impl ProbeClient for HttpProbeClient {
    async fn fetch(&self, address: Ipv4Addr, port: u16, path: &str) -> ProbeResult {
        let url = match probe_url(address, port, path) {
            Ok(url) => url,
            Err(e) => return ProbeResult::Failure(ProbeFailure::Other(e.to_string())),
        };

        match self.send(url).await {
            Ok(response) => {
                debug!("探测成功：{}:{}{}，状态码={}", address, port, path, response.status);
                ProbeResult::Success(response)
            }
            Err(failure) => {
                debug!("探测失败：{}:{}{}，{}", address, port, path, failure);
                ProbeResult::Failure(failure)
            }
        }
    }
}
