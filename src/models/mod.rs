// 数据模型模块 - 分析结果与动作事件

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AnalyzeError;

/// 一次分析的最终结果，序列化为单行 JSON 输出到 stdout
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    /// 模型返回的 JSON 原样透传，不做结构校验
    Success { data: Value },
    Failure { error: String },
}

impl AnalysisResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResult::Success { .. })
    }

    pub fn failure(error: impl Into<String>) -> Self {
        AnalysisResult::Failure {
            error: error.into(),
        }
    }

    /// 不带缩进的 JSON，保证只有一行
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({ "success": false, "error": e.to_string() }).to_string()
        })
    }
}

impl From<AnalyzeError> for AnalysisResult {
    fn from(err: AnalyzeError) -> Self {
        AnalysisResult::failure(err.to_string())
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            AnalysisResult::Success { data } => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", data)?;
            }
            AnalysisResult::Failure { error } => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
            }
        }
        map.end()
    }
}

/// 动作标签（提示词中限定的九类）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionTag {
    #[serde(rename = "POINT")]
    Point,
    #[serde(rename = "PUSH/PULL")]
    PushPull,
    #[serde(rename = "SWIPE")]
    Swipe,
    #[serde(rename = "WAVE/ROLL")]
    WaveRoll,
    #[serde(rename = "CLAP/PUNCH")]
    ClapPunch,
    #[serde(rename = "HEART")]
    Heart,
    #[serde(rename = "FRAME")]
    Frame,
    #[serde(rename = "SPIN/CIRCLE")]
    SpinCircle,
    #[serde(rename = "GREET")]
    Greet,
}

impl ActionTag {
    pub const ALL: [ActionTag; 9] = [
        ActionTag::Point,
        ActionTag::PushPull,
        ActionTag::Swipe,
        ActionTag::WaveRoll,
        ActionTag::ClapPunch,
        ActionTag::Heart,
        ActionTag::Frame,
        ActionTag::SpinCircle,
        ActionTag::Greet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionTag::Point => "POINT",
            ActionTag::PushPull => "PUSH/PULL",
            ActionTag::Swipe => "SWIPE",
            ActionTag::WaveRoll => "WAVE/ROLL",
            ActionTag::ClapPunch => "CLAP/PUNCH",
            ActionTag::Heart => "HEART",
            ActionTag::Frame => "FRAME",
            ActionTag::SpinCircle => "SPIN/CIRCLE",
            ActionTag::Greet => "GREET",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

/// 模型输出中的单个动作事件
///
/// 仅用于日志统计和文档说明，输出结果不依赖这个结构。
/// `action_tag` 保留原始字符串，模型自创的标签也能被读出来。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionEvent {
    pub id: i64,
    pub timestamp: String,
    pub action_tag: String,
    #[serde(default)]
    pub description: String,
    pub intensity: i64,
    #[serde(default)]
    pub rhythm_point: bool,
}

impl ActionEvent {
    pub fn tag(&self) -> Option<ActionTag> {
        ActionTag::from_tag(&self.action_tag)
    }

    pub fn intensity_in_range(&self) -> bool {
        (1..=10).contains(&self.intensity)
    }
}
