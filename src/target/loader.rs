//! 网段文件加载
//! 每行一个CIDR，去除首尾空白，忽略空行和 # 注释行

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{RswebscanError, RwsResult};

/// 网段文件加载器
pub struct RangeLoader;

impl RangeLoader {
    /// 读取网段文件，文件不存在时返回 `MissingInput`
    pub async fn load(path: &Path) -> RwsResult<Vec<String>> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => RswebscanError::MissingInput(path.to_path_buf()),
            _ => RswebscanError::IoError(e),
        })?;

        let ranges = Self::parse_lines(&content);
        debug!("读取网段文件 {} 完成，共 {} 个网段", path.display(), ranges.len());
        Ok(ranges)
    }

    /// 按行解析网段文本
    pub fn parse_lines(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }
}
