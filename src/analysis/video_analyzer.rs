//! 视频分析器
//!
//! 单个视频的完整分析流程：
//! 读取文件 → base64 编码 → 调用模型 → 提取 JSON → 返回结果

use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::Result;
use crate::llm::VisionProvider;
use crate::models::{ActionEvent, AnalysisResult};
use crate::utils::{parse_model_json, read_video_base64, video_data_uri};

pub struct VideoAnalyzer<P> {
    provider: P,
}

impl<P: VisionProvider> VideoAnalyzer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    #[cfg(test)]
    fn provider(&self) -> &P {
        &self.provider
    }

    /// 分析本地视频，所有错误都转换为 Failure
    pub async fn analyze(&self, video_path: &Path) -> AnalysisResult {
        match self.run(video_path).await {
            Ok(data) => {
                log_action_summary(&data);
                AnalysisResult::Success { data }
            }
            Err(e) => AnalysisResult::from(e),
        }
    }

    async fn run(&self, video_path: &Path) -> Result<Value> {
        info!("开始分析视频: {}", video_path.display());

        let base64_video = read_video_base64(video_path).await?;
        let raw_content = self
            .provider
            .analyze_video(&video_data_uri(&base64_video))
            .await?;

        parse_model_json(&raw_content)
    }
}

/// 按动作事件的结构宽松检查一遍，只记录日志，不影响结果
fn log_action_summary(data: &Value) {
    let Some(items) = data.as_array() else {
        warn!("模型返回的不是 JSON 数组");
        return;
    };

    let mut rhythm_points = 0;
    for item in items {
        match serde_json::from_value::<ActionEvent>(item.clone()) {
            Ok(event) => {
                if event.rhythm_point {
                    rhythm_points += 1;
                }
                if event.tag().is_none() {
                    warn!("动作 {} 的标签不在参考范围内: {}", event.id, event.action_tag);
                }
                if !event.intensity_in_range() {
                    warn!("动作 {} 的强度超出 1-10: {}", event.id, event.intensity);
                }
            }
            Err(e) => warn!("动作条目结构不符合预期: {}", e),
        }
    }

    info!("解析到 {} 个动作，其中 {} 个卡点", items.len(), rhythm_points);
}
