use clap::Parser;

/// 命令列參數，每個參數都可以用環境變數提供
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cwa-weather-api")]
#[command(about = "Weather API proxy that reshapes CWA forecasts for front-end clients")]
pub struct CliConfig {
    #[arg(long, env = "PORT", help = "Port to listen on (default 3000)")]
    pub port: Option<u16>,

    #[arg(long, env = "CWA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "CWA_API_BASE_URL")]
    pub api_base_url: Option<String>,

    #[arg(long, env = "CWA_DATASET_ID")]
    pub dataset_id: Option<String>,

    #[arg(long, env = "APP_ENV", help = "Environment label, e.g. development or production")]
    pub environment: Option<String>,

    #[arg(short, long, env = "WEATHER_CONFIG", help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
