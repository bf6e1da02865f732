//! 全局配置管理,存储所有可配置项
//! 配置在构建后不可变，扫描期间由所有并发探测只读共享

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{RswebscanError, RwsResult};

/// 默认探测端口
pub const DEFAULT_PORTS: [u16; 8] = [80, 3000, 3001, 8080, 5000, 8000, 443, 8443];
/// 默认单请求超时（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;
/// 默认并发上限
pub const DEFAULT_CONCURRENCY: usize = 100;

/// 扫描配置
#[derive(Debug, Clone)]
pub struct ScanConfig {
    // 探测端口列表
    pub ports: Vec<u16>,
    // 单请求超时
    pub http_timeout: Duration,
    // 同时进行的识别任务上限
    pub concurrency: usize,
    // 网段文件路径
    pub input_path: PathBuf,
    // 结果文件路径
    pub output_path: PathBuf,
    // 详细结果（JSON）路径
    pub json_path: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ports: DEFAULT_PORTS.to_vec(),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: DEFAULT_CONCURRENCY,
            input_path: PathBuf::from("network.txt"),
            output_path: PathBuf::from("scan_result.txt"),
            json_path: None,
        }
    }
}

impl ScanConfig {
    /// 校验配置合法性
    pub fn validate(&self) -> RwsResult<()> {
        if self.ports.is_empty() {
            return Err(RswebscanError::InvalidConfig("端口列表不能为空".to_string()));
        }
        if self.ports.contains(&0) {
            return Err(RswebscanError::InvalidConfig("端口不能为0".to_string()));
        }
        if self.concurrency == 0 {
            return Err(RswebscanError::InvalidConfig("并发数必须大于0".to_string()));
        }
        if self.http_timeout.is_zero() {
            return Err(RswebscanError::InvalidConfig("超时时间必须大于0".to_string()));
        }
        Ok(())
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> ScanConfig {
        ScanConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ScanConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    pub fn ports(mut self, ports: Vec<u16>) -> Self {
        self.config.ports = ports;
        self
    }

    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    pub fn input_path(mut self, path: PathBuf) -> Self {
        self.config.input_path = path;
        self
    }

    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.config.output_path = path;
        self
    }

    pub fn json_path(mut self, path: Option<PathBuf>) -> Self {
        self.config.json_path = path;
        self
    }

    /// 构建并校验配置
    pub fn build(self) -> RwsResult<ScanConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert_eq!(config.ports, vec![80, 3000, 3001, 8080, 5000, 8000, 443, 8443]);
        assert_eq!(config.http_timeout, Duration::from_secs(2));
        assert_eq!(config.concurrency, 100);
        assert_eq!(config.input_path, PathBuf::from("network.txt"));
        assert_eq!(config.output_path, PathBuf::from("scan_result.txt"));
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        assert!(ConfigManager::custom().ports(vec![]).build().is_err());
        assert!(ConfigManager::custom().ports(vec![80, 0]).build().is_err());
        assert!(ConfigManager::custom().concurrency(0).build().is_err());
        assert!(ConfigManager::custom().http_timeout(Duration::ZERO).build().is_err());

        let config = ConfigManager::custom()
            .ports(vec![3000])
            .concurrency(4)
            .build()
            .unwrap();
        assert_eq!(config.ports, vec![3000]);
        assert_eq!(config.concurrency, 4);
    }
}
