//! 从模型回复中提取 JSON
//!
//! 模型常把 JSON 包在 Markdown 代码块里：
//! 1. ` ```json\n[...]\n``` ` 优先匹配带 json 标记的代码块
//! 2. ` ```\n[...]\n``` ` 其次匹配任意代码块（跳过语言标记）
//! 3. 没有代码块时原文即候选 JSON
//!
//! 只取第一个匹配的代码块，不做任何修复。

use serde_json::Value;

use crate::error::Result;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// 提取候选 JSON 文本（已去除首尾空白）
pub fn extract_json_block(text: &str) -> &str {
    if let Some(start) = text.find(JSON_FENCE) {
        return until_closing_fence(&text[start + JSON_FENCE.len()..]);
    }

    if let Some(start) = text.find(FENCE) {
        let after = &text[start + FENCE.len()..];
        return until_closing_fence(skip_language_tag(after));
    }

    text.trim()
}

/// 提取并解析，解析失败即返回错误
pub fn parse_model_json(text: &str) -> Result<Value> {
    let candidate = extract_json_block(text);
    Ok(serde_json::from_str(candidate)?)
}

// 没有结束标记时取到文本末尾
fn until_closing_fence(body: &str) -> &str {
    match body.find(FENCE) {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}

// 开头标记后紧跟的语言标识（如 `javascript`），只有后面接换行时才算
fn skip_language_tag(after: &str) -> &str {
    let tag_len = after
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '+'))
        .unwrap_or(after.len());

    let rest = &after[tag_len..];
    if tag_len > 0 && (rest.starts_with('\n') || rest.starts_with("\r\n")) {
        rest
    } else {
        after
    }
}
