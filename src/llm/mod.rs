// LLM模块 - 多模态模型调用

pub mod prompt;
pub mod qwen;

pub use qwen::QwenProvider;

use async_trait::async_trait;

use crate::error::Result;

/// 视觉模型提供商接口
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// 提交视频并返回模型的文本回复
    ///
    /// # 参数
    /// * `video_data_uri` - `data:video/mp4;base64,...` 形式的视频
    ///
    /// # 返回
    /// * 第一个 choice 的文本内容（未做任何清洗）
    async fn analyze_video(&self, video_data_uri: &str) -> Result<String>;

    /// 获取提供商名称
    fn name(&self) -> &str;
}

/// 创建共享的 HTTP 客户端
///
/// 超时与原先使用的 SDK 默认值保持一致（600 秒）
pub fn build_http_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(600))
        .build()?;
    Ok(client)
}
