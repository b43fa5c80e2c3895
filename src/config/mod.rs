pub mod cli;
pub mod toml_config;

pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::adapters::cwa::{DEFAULT_API_BASE_URL, DEFAULT_DATASET_ID};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// 啟動時解析一次的設定，之後以唯讀方式注入到 handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub environment: String,
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub dataset_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            dataset_id: DEFAULT_DATASET_ID.to_string(),
        }
    }
}

impl AppConfig {
    /// 讀取命令列/環境變數，若有指定設定檔一併載入
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        Ok(Self::resolve(cli, file.as_ref()))
    }

    /// 優先順序：命令列/環境變數 > 設定檔 > 預設值
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let defaults = Self::default();

        let port = cli
            .port
            .or_else(|| file.and_then(TomlConfig::port))
            .unwrap_or(defaults.port);

        let environment = cli
            .environment
            .clone()
            .or_else(|| file.and_then(|f| f.environment().map(str::to_string)))
            .unwrap_or(defaults.environment);

        let api_base_url = cli
            .api_base_url
            .clone()
            .or_else(|| file.and_then(|f| f.base_url().map(str::to_string)))
            .unwrap_or(defaults.api_base_url);

        // 空字串的 API Key 等同未設定
        let api_key = cli
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| file.and_then(|f| f.api_key().map(str::to_string)))
            .filter(|key| !key.trim().is_empty());

        let dataset_id = cli
            .dataset_id
            .clone()
            .or_else(|| file.and_then(|f| f.dataset_id().map(str::to_string)))
            .unwrap_or(defaults.dataset_id);

        Self {
            port,
            environment,
            api_base_url,
            api_key,
            dataset_id,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl ConfigProvider for AppConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn dataset_id(&self) -> &str {
        &self.dataset_id
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base_url", &self.api_base_url)?;
        validation::validate_positive_number("port", usize::from(self.port), 1)?;
        validation::validate_non_empty_string("dataset_id", &self.dataset_id)?;
        validation::validate_non_empty_string("environment", &self.environment)?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}
