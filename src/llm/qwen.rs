// 阿里通义千问提供商实现 - 视频以 base64 data URI 直接提交

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use super::prompt::{SYSTEM_PROMPT, USER_INSTRUCTION, VIDEO_FPS};
use super::VisionProvider;
use crate::error::{AnalyzeError, Result};
use crate::settings::Settings;

/// Qwen提供商（DashScope compatible-mode 接口）
pub struct QwenProvider {
    api_key: String,
    model: String,
    client: Client,
    endpoint: String,
}

impl QwenProvider {
    /// 创建新的Qwen提供商（接受共享的HTTP客户端）
    pub fn new(client: Client, settings: &Settings) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            client,
            endpoint: settings.chat_completions_url(),
        }
    }

    /// 构建请求体：系统提示词 + 视频与指令组成的用户消息
    pub fn build_request_body(&self, video_data_uri: &str) -> Value {
        let user_content = vec![
            json!({
                "type": "video_url",
                "video_url": {
                    "url": video_data_uri
                },
                "fps": VIDEO_FPS
            }),
            json!({
                "type": "text",
                "text": USER_INSTRUCTION
            }),
        ];

        json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": user_content
                }
            ]
        })
    }

    /// 从响应中取出第一个 choice 的文本
    fn first_choice_content(response: QwenResponse) -> Result<String> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(AnalyzeError::EmptyResponse)?;

        if choice.finish_reason.as_deref() == Some("length") {
            warn!("LLM 响应因达到 token 限制而被截断 (finish_reason=length)");
        }

        choice
            .message
            .content
            .ok_or(AnalyzeError::EmptyResponse)
    }
}

#[async_trait]
impl VisionProvider for QwenProvider {
    async fn analyze_video(&self, video_data_uri: &str) -> Result<String> {
        let start_time = std::time::Instant::now();
        let request_body = self.build_request_body(video_data_uri);

        debug!(
            "调用Qwen API with video: model={}, endpoint={}, payload={} 字节",
            self.model,
            self.endpoint,
            video_data_uri.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Qwen API错误: {}", error_text);
            return Err(AnalyzeError::Api {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let response_data: QwenResponse = response.json().await?;

        if let Some(usage) = &response_data.usage {
            debug!("Qwen token 用量: {}", usage);
        }

        let content = Self::first_choice_content(response_data)?;
        info!(
            "Qwen API 调用完成: 耗时 {} ms, 回复 {} 字符",
            start_time.elapsed().as_millis(),
            content.chars().count()
        );

        Ok(content)
    }

    fn name(&self) -> &str {
        "qwen"
    }
}

/// Qwen API响应结构
#[derive(Debug, Deserialize)]
struct QwenResponse {
    choices: Vec<QwenChoice>,
    usage: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct QwenChoice {
    message: QwenMessage,
    finish_reason: Option<String>, // 完成原因：stop, length, etc
}

#[derive(Debug, Deserialize)]
struct QwenMessage {
    content: Option<String>,
}
