// 错误类型 - 分析流程中所有可能的失败

use std::path::PathBuf;

use thiserror::Error;

/// 视频分析错误
///
/// 所有变体最终都会折叠成 `{"success": false, "error": "..."}`，
/// 区分信息只保留在 `Display` 文本里。
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// 未配置 API key（不会发起任何网络请求）
    #[error("请在 .env 中设置 DASHSCOPE_API_KEY")]
    MissingApiKey,

    #[error("找不到本地文件: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("读取视频失败: {0}")]
    ReadVideo(#[source] std::io::Error),

    /// 网络或客户端错误，直接沿用 reqwest 的错误文本
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// 服务端返回非 2xx 状态码
    #[error("Qwen API调用失败 ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Qwen API 返回空结果")]
    EmptyResponse,

    #[error("JSON 解析失败: {0}")]
    JsonDecode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
