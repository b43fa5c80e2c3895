use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    let directives = if verbose {
        "cwa_weather_api=debug,tower_http=debug,info"
    } else {
        "cwa_weather_api=info,tower_http=info"
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // production 環境使用 JSON 格式，方便集中式日誌收集
        )
        .init();
}

/// 依環境標籤選擇日誌格式
pub fn init_logger(environment: &str, verbose: bool) {
    if environment.eq_ignore_ascii_case("production") {
        init_json_logger(verbose);
    } else {
        init_cli_logger(verbose);
    }
}
