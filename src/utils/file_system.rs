//! 文件系统操作工具
//!
//! 读取本地视频并编码为 data URI

use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use tracing::debug;

use crate::error::{AnalyzeError, Result};

/// 视频 data URI 的 MIME 前缀
pub const VIDEO_DATA_URI_PREFIX: &str = "data:video/mp4;base64,";

/// 读取整个视频文件并转换为 base64
///
/// # 参数
/// - `path`: 本地视频路径
///
/// # 返回
/// - `Ok(String)`: base64 编码后的内容
/// - `Err(AnalyzeError::FileNotFound)`: 路径不存在
/// - `Err(AnalyzeError::ReadVideo)`: 读取失败（例如路径是目录或无权限）
pub async fn read_video_base64(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(AnalyzeError::FileNotFound(path.to_path_buf()));
    }

    // 不限制大小，过大的文件由服务端拒绝
    let bytes = tokio::fs::read(path)
        .await
        .map_err(AnalyzeError::ReadVideo)?;
    debug!("读取视频 {} 字节: {}", bytes.len(), path.display());

    Ok(general_purpose::STANDARD.encode(&bytes))
}

pub fn video_data_uri(base64_video: &str) -> String {
    format!("{}{}", VIDEO_DATA_URI_PREFIX, base64_video)
}
