// 手势舞视频动作解析器 - 主库

// 声明模块
pub mod analysis;
pub mod error;
pub mod llm;
pub mod logger;
pub mod models;
pub mod server;
pub mod settings;
pub mod utils;

use std::path::Path;

use tracing::info;

pub use analysis::VideoAnalyzer;
pub use error::AnalyzeError;
pub use llm::{QwenProvider, VisionProvider};
pub use models::{ActionEvent, ActionTag, AnalysisResult};
pub use settings::Settings;

/// 用 Qwen 提供商分析一个本地视频
///
/// 配置由调用方在进程启动时构建一次后传入
pub async fn analyze_video(settings: &Settings, video_path: &Path) -> AnalysisResult {
    let client = match llm::build_http_client() {
        Ok(client) => client,
        Err(e) => return AnalysisResult::from(e),
    };

    let provider = QwenProvider::new(client, settings);
    info!("使用 {} 提供商, 模型 {}", provider.name(), settings.model);

    VideoAnalyzer::new(provider).analyze(video_path).await
}
