//! HTTP 上传服务
//!
//! - `POST /api/analyze`：multipart 的 `video` 字段，落盘为临时文件后分析
//! - `GET /api/health`：健康检查
//!
//! 成功返回 200，失败返回 500，响应体与命令行输出的 JSON 相同。
//! 临时文件在请求结束时删除，无论分析成功与否。

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::analysis::VideoAnalyzer;
use crate::llm::VisionProvider;
use crate::models::AnalysisResult;

/// 上传文件大小上限（100MB）
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// 上传字段名
pub const VIDEO_FIELD: &str = "video";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 上传文件的临时目录
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            upload_dir: std::env::temp_dir(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

struct ServerState<P> {
    analyzer: VideoAnalyzer<P>,
    config: ServerConfig,
}

type ApiResponse = (StatusCode, Json<AnalysisResult>);

/// 构建路由（允许任意来源跨域）
pub fn build_router<P>(analyzer: VideoAnalyzer<P>, config: ServerConfig) -> Router
where
    P: VisionProvider + 'static,
{
    let body_limit = config.max_upload_bytes;
    let state = Arc::new(ServerState { analyzer, config });

    Router::new()
        .route("/api/analyze", post(analyze_upload::<P>))
        .route("/api/health", get(health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn analyze_upload<P>(
    State(state): State<Arc<ServerState<P>>>,
    mut multipart: Multipart,
) -> ApiResponse
where
    P: VisionProvider + 'static,
{
    let video = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(VIDEO_FIELD) => match field.bytes().await {
                Ok(bytes) => break Some(bytes),
                Err(e) => return reject(e.status(), e.body_text()),
            },
            Ok(Some(_)) => continue,
            Ok(None) => break None,
            Err(e) => return reject(e.status(), e.body_text()),
        }
    };

    let Some(video) = video else {
        return reject(StatusCode::BAD_REQUEST, "请上传视频文件".to_string());
    };

    // 文件句柄随 upload 一起释放，drop 时删除临时文件
    let upload = match tempfile::Builder::new()
        .prefix("upload-")
        .suffix(".mp4")
        .tempfile_in(&state.config.upload_dir)
    {
        Ok(file) => file,
        Err(e) => {
            return reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("保存上传文件失败: {}", e),
            )
        }
    };

    if let Err(e) = tokio::fs::write(upload.path(), &video).await {
        return reject(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("保存上传文件失败: {}", e),
        );
    }

    info!("收到上传视频 {} 字节: {}", video.len(), upload.path().display());
    let result = state.analyzer.analyze(upload.path()).await;

    if let Err(e) = upload.close() {
        warn!("删除临时文件失败: {}", e);
    }

    if let AnalysisResult::Failure { error } = &result {
        error!("分析视频时出错: {}", error);
    }

    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(result))
}

fn reject(status: StatusCode, message: String) -> ApiResponse {
    warn!("拒绝上传请求 ({}): {}", status, message);
    (status, Json(AnalysisResult::failure(message)))
}
