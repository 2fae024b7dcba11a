use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use gesture_analyzer::llm::build_http_client;
use gesture_analyzer::server::{build_router, ServerConfig, DEFAULT_MAX_UPLOAD_BYTES};
use gesture_analyzer::{logger, QwenProvider, Settings, VideoAnalyzer};

/// 视频动作解析 HTTP 服务
#[derive(Parser, Debug)]
#[command(name = "analyse-server", version, about)]
struct Cli {
    /// 监听地址
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// 监听端口
    #[arg(long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// 上传文件的临时目录（默认系统临时目录）
    #[arg(long)]
    upload_dir: Option<PathBuf>,

    /// 上传大小上限（字节）
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,

    /// 指定环境文件，不指定时查找 .env
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logger::init()?;

    let settings = match &cli.env_file {
        Some(path) => Settings::from_env_file(path),
        None => Settings::from_env(),
    };
    let settings = settings.map_err(|e| {
        error!("{}", e);
        e
    })?;

    let config = ServerConfig {
        upload_dir: cli.upload_dir.unwrap_or_else(std::env::temp_dir),
        max_upload_bytes: cli.max_upload_bytes,
    };
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let provider = QwenProvider::new(build_http_client()?, &settings);
    let app = build_router(VideoAnalyzer::new(provider), config);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API 服务器运行在 http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
