//! 探测结果模型
//! 每次HTTP请求的结果要么是成功响应，要么是传输层失败，调用方必须显式处理两种情况

use std::collections::HashMap;
use std::fmt;

/// 传输层失败原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// 请求超时
    Timeout,
    /// 连接失败（拒绝、重置、不可达等）
    Connect(String),
    /// 响应体读取/解码失败
    Body(String),
    /// 其他传输错误（畸形响应、重定向异常等）
    Other(String),
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::Timeout => write!(f, "请求超时"),
            ProbeFailure::Connect(reason) => write!(f, "连接失败：{}", reason),
            ProbeFailure::Body(reason) => write!(f, "响应体读取失败：{}", reason),
            ProbeFailure::Other(reason) => write!(f, "传输错误：{}", reason),
        }
    }
}

/// 成功的HTTP响应
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    // 小写键 → 小写值
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ProbeResponse {
    pub fn new(status: u16, headers: HashMap<String, String>, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// 获取Header值（键需为小写）
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// 单次探测结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    Success(ProbeResponse),
    Failure(ProbeFailure),
}

impl ProbeResult {
    pub fn response(&self) -> Option<&ProbeResponse> {
        match self {
            ProbeResult::Success(response) => Some(response),
            ProbeResult::Failure(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ProbeResult::Failure(_))
    }
}

impl From<reqwest::Error> for ProbeFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProbeFailure::Timeout
        } else if err.is_connect() {
            ProbeFailure::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            ProbeFailure::Body(err.to_string())
        } else {
            ProbeFailure::Other(err.to_string())
        }
    }
}
