use crate::config::LogConfig;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

/// 初始化日志 - 使用本地时间格式，带 target 和级别
/// `RUST_LOG` 优先于配置中的 filter
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .with_env_filter(filter)
        .init();
}
