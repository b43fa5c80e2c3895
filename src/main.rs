use anyhow::Context;
use clap::Parser;
use cwa_weather_api::utils::{logger, validation::Validate};
use cwa_weather_api::{run_server, AppConfig, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 先解析設定，日誌格式取決於環境標籤
    let config = AppConfig::load(&cli).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load config file '{}'", path),
        None => "Failed to load configuration".to_string(),
    })?;

    // 初始化日誌
    logger::init_logger(&config.environment, cli.verbose);

    tracing::info!("Starting cwa-weather-api");
    if let Some(path) = &cli.config {
        tracing::info!("📁 Configuration loaded from: {}", path);
    }
    if cli.verbose {
        tracing::debug!(
            "Resolved config: port={}, environment={}, api_base_url={}, dataset_id={}",
            config.port,
            config.environment,
            config.api_base_url,
            config.dataset_id
        );
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    run_server(config).await.context("Server error")?;

    Ok(())
}
