use crate::utils::error::{Result, WeatherError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    pub upstream: Option<UpstreamConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub environment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub dataset_id: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WeatherError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| WeatherError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CWA_API_KEY})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WeatherError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn port(&self) -> Option<u16> {
        self.server.as_ref().and_then(|s| s.port)
    }

    pub fn environment(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.environment.as_deref())
    }

    pub fn base_url(&self) -> Option<&str> {
        self.upstream.as_ref().and_then(|u| u.base_url.as_deref())
    }

    /// 取得 API Key；仍是未替換的 ${...} 佔位字串時視為未設定
    pub fn api_key(&self) -> Option<&str> {
        self.upstream
            .as_ref()
            .and_then(|u| u.api_key.as_deref())
            .filter(|key| !(key.starts_with("${") && key.ends_with('}')))
    }

    pub fn dataset_id(&self) -> Option<&str> {
        self.upstream.as_ref().and_then(|u| u.dataset_id.as_deref())
    }
}
