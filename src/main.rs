//! rswebscan 命令行入口
//! 读取网段文件 → 扫描 → 写出结果文件

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rswebscan::config::{DEFAULT_CONCURRENCY, DEFAULT_PORTS, DEFAULT_TIMEOUT_SECS};
use rswebscan::{ConfigManager, RangeLoader, RswebscanError, Scanner};

/// 网段批量探测 Next.js / Dify / React 服务
#[derive(Debug, Parser)]
#[command(name = "rswebscan", version, about)]
struct Cli {
    /// 网段文件，每行一个CIDR
    #[arg(short, long, default_value = "network.txt")]
    input: PathBuf,

    /// 结果文件，每行一个URL
    #[arg(short, long, default_value = "scan_result.txt")]
    output: PathBuf,

    /// 额外输出JSON格式的详细结果
    #[arg(long)]
    json: Option<PathBuf>,

    /// 探测端口，逗号分隔
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_PORTS.to_vec())]
    ports: Vec<u16>,

    /// 单请求超时（秒）
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// 同时进行的识别任务数
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "rswebscan=debug" } else { "rswebscan=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// 执行一次完整扫描，失败时返回的错误由 `main` 转换为退出码
async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ConfigManager::custom()
        .input_path(cli.input)
        .output_path(cli.output)
        .json_path(cli.json)
        .ports(cli.ports)
        .http_timeout(Duration::from_secs(cli.timeout))
        .concurrency(cli.concurrency)
        .build()?;

    let networks = RangeLoader::load(&config.input_path)
        .await
        .context("读取网段文件失败")?;

    println!("读取到 {} 个网段：", networks.len());
    for network in &networks {
        println!(" - {}", network);
    }

    let scanner = Scanner::new(config.clone())?.on_hit(|hit| {
        println!("[✔] {}  →  {} ({})", hit.url(), hit.framework, hit.evidence);
    });

    println!("\n开始扫描，端口：{:?}，并发：{}", config.ports, config.concurrency);
    let report = scanner.scan(networks.as_slice()).await;

    for rejected in &report.rejected_ranges {
        eprintln!("已跳过无效网段：{}（{}）", rejected.range, rejected.reason);
    }

    if let Some(json_path) = &config.json_path {
        report
            .write_json(json_path)
            .await
            .with_context(|| format!("写入JSON结果失败：{}", json_path.display()))?;
    }

    let written = report
        .write_urls(&config.output_path)
        .await
        .with_context(|| format!("写入结果文件失败：{}", config.output_path.display()))?;

    if written {
        println!("\nURL 已保存到：{}", config.output_path.display());
    } else {
        println!("未找到任何服务");
    }

    Ok(())
}

/// 面向终端的错误提示
fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<RswebscanError>() {
        Some(RswebscanError::MissingInput(path)) => format!("错误：无法找到 {}", path.display()),
        _ => format!("错误：{:#}", err),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}
