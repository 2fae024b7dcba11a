use std::fmt;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{AnalyzeError, Result};

pub const DEFAULT_BASE_URL: &str = "https://dashscope.aliyuncs.com/compatible-mode/v1";
pub const DEFAULT_MODEL: &str = "qwen-vl-plus";

pub const API_KEY_VAR: &str = "DASHSCOPE_API_KEY";
pub const BASE_URL_VAR: &str = "DASHSCOPE_BASE_URL";
pub const MODEL_VAR: &str = "MODEL_NAME";

/// 运行配置，进程启动时构建一次，之后只读
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl Settings {
    /// 从进程环境读取配置（先加载 .env，已有的环境变量优先）
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("已加载环境文件: {}", path.display()),
            Err(e) => debug!("未加载 .env: {}", e),
        }

        Self::from_process_env()
    }

    /// 先加载指定的环境文件再读取（已有的环境变量同样优先）
    pub fn from_env_file(path: &Path) -> Result<Self> {
        match dotenvy::from_path(path) {
            Ok(()) => debug!("已加载环境文件: {}", path.display()),
            Err(e) => warn!("加载环境文件 {} 失败: {}", path.display(), e),
        }

        Self::from_process_env()
    }

    fn from_process_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = non_empty(API_KEY_VAR).ok_or(AnalyzeError::MissingApiKey)?;
        let base_url = non_empty(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }

    /// chat completions 接口地址
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let settings = Settings::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-test")])).unwrap();
        assert_eq!(settings.api_key, "sk-test");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(
            settings.chat_completions_url(),
            "https://dashscope.aliyuncs.com/compatible-mode/v1/chat/completions"
        );
    }

    #[test]
    fn test_missing_or_blank_key() {
        let err = Settings::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, AnalyzeError::MissingApiKey));

        let err = Settings::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")])).unwrap_err();
        assert!(matches!(err, AnalyzeError::MissingApiKey));
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let settings = Settings::from_lookup(lookup_from(&[
            (API_KEY_VAR, "sk-test"),
            (BASE_URL_VAR, "http://127.0.0.1:8080/v1/"),
            (MODEL_VAR, "qwen-vl-max"),
        ]))
        .unwrap();
        assert_eq!(settings.model, "qwen-vl-max");
        assert_eq!(
            settings.chat_completions_url(),
            "http://127.0.0.1:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_env_file_loaded_and_process_env_wins() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");
        std::fs::write(
            &env_path,
            "DASHSCOPE_API_KEY=sk-from-file\nMODEL_NAME=file-model\n",
        )
        .unwrap();

        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var(BASE_URL_VAR);
        std::env::set_var(MODEL_VAR, "process-model");

        let settings = Settings::from_env_file(&env_path).unwrap();

        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var(MODEL_VAR);

        assert_eq!(settings.api_key, "sk-from-file");
        assert_eq!(settings.model, "process-model");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_debug_masks_key() {
        let settings = Settings::from_lookup(lookup_from(&[(API_KEY_VAR, "sk-secret")])).unwrap();
        let printed = format!("{:?}", settings);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("***"));
    }
}
