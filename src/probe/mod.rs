//! 探测模块：HTTP探测客户端与探测结果
pub mod client;
pub mod result;

pub use self::client::{probe_url, HttpProbeClient, ProbeClient};
pub use self::result::{ProbeFailure, ProbeResponse, ProbeResult};
