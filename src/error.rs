//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use std::path::PathBuf;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum RswebscanError {
    // 输入相关错误
    #[error("无法找到网段文件：{}", .0.display())]
    MissingInput(PathBuf),
    #[error("无效网段：{range}（{reason}）")]
    InvalidRange { range: String, reason: String },

    // 规则相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 网络相关错误
    #[error("HTTP客户端初始化失败：{0}")]
    HttpError(#[from] reqwest::Error),

    // 序列化错误
    #[error("JSON序列化失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效配置：{0}")]
    InvalidConfig(String),
}

impl RswebscanError {
    pub fn invalid_range(range: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidRange {
            range: range.into(),
            reason: reason.to_string(),
        }
    }
}

// 全局Result类型
pub type RwsResult<T> = Result<T, RswebscanError>;
