//! 集成测试公共工具：可记录调用的探测客户端替身与最小HTTP服务
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use rswebscan::{ProbeClient, ProbeFailure, ProbeResponse, ProbeResult};

pub const HOST_A: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 1);
pub const HOST_B: Ipv4Addr = Ipv4Addr::new(10, 0, 0, 2);

/// 构造响应，Header 键值按真实客户端的方式转小写
pub fn response(status: u16, headers: &[(&str, &str)], body: &str) -> ProbeResponse {
    let headers: HashMap<String, String> = headers
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
        .collect();
    ProbeResponse::new(status, headers, body)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeCall {
    pub address: Ipv4Addr,
    pub port: u16,
    pub path: String,
}

/// 按 (地址, 端口, 路径) 返回预设响应的探测客户端，未配置的目标一律连接失败
#[derive(Default)]
pub struct MockProbeClient {
    routes: HashMap<(Ipv4Addr, u16, String), ProbeResponse>,
    delay: Option<Duration>,
    calls: Mutex<Vec<ProbeCall>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockProbeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, address: Ipv4Addr, port: u16, path: &str, response: ProbeResponse) -> Self {
        self.routes.insert((address, port, path.to_string()), response);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<ProbeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn paths_for(&self, address: Ipv4Addr, port: u16) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.address == address && call.port == port)
            .map(|call| call.path)
            .collect()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProbeClient for MockProbeClient {
    async fn fetch(&self, address: Ipv4Addr, port: u16, path: &str) -> ProbeResult {
        self.calls.lock().unwrap().push(ProbeCall {
            address,
            port,
            path: path.to_string(),
        });

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.routes.get(&(address, port, path.to_string())) {
            Some(response) => ProbeResult::Success(response.clone()),
            None => ProbeResult::Failure(ProbeFailure::Connect("connection refused".to_string())),
        }
    }
}

/// 本地HTTP服务的单条路由
#[derive(Debug, Clone)]
pub struct MockRoute {
    pub path: &'static str,
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: &'static str,
}

impl MockRoute {
    pub fn new(path: &'static str, status: u16, body: &'static str) -> Self {
        Self {
            path,
            status,
            headers: Vec::new(),
            body,
        }
    }

    pub fn header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }
}

/// 启动一个最小HTTP/1.1服务，未配置的路径返回404
pub async fn spawn_http_server(routes: Vec<MockRoute>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes = Arc::new(routes);

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let routes = routes.clone();

            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => {
                            buf.extend_from_slice(&chunk[..n]);
                            if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                    }
                }

                let request = String::from_utf8_lossy(&buf);
                let path = request
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();

                let (status, headers, body) = match routes.iter().find(|route| route.path == path) {
                    Some(route) => (route.status, route.headers.clone(), route.body),
                    None => (404, Vec::new(), ""),
                };

                let reason = if status == 200 { "OK" } else { "Status" };
                let mut raw = format!(
                    "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n",
                    status,
                    reason,
                    body.len()
                );
                for (name, value) in headers {
                    raw.push_str(&format!("{}: {}\r\n", name, value));
                }
                raw.push_str("\r\n");
                raw.push_str(body);

                let _ = stream.write_all(raw.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    addr
}

/// 接受连接但从不响应的服务，用于超时测试
pub async fn spawn_silent_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    addr
}
