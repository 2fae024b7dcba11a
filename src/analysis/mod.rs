//! 视频分析模块
//!
//! 负责核心的视频分析业务逻辑：单个本地视频的动作解析

pub mod video_analyzer;

// 重新导出常用结构体和函数
pub use video_analyzer::*;
