//! 工具函数模块
//!
//! 提供各类通用工具函数，包括：
//! - 视频文件读取与编码
//! - 模型回复中的 JSON 提取

pub mod file_system;
pub mod json_extract;

// 重新导出常用函数
pub use file_system::*;
pub use json_extract::*;
