//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber`，按组件过滤。Events go to stderr so that stdout
//! only carries the scanned values.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use ll1_config::{Component, LogConfig, LogFormat, LogLevel};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

/// Map a configured level onto tracing's; `Silent` disables everything
pub fn to_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Silent => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

/// Build filter targets
pub fn targets(log_config: &LogConfig) -> Targets {
    Targets::new()
        .with_default(to_filter(log_config.global))
        .with_target(
            Component::Core.target(),
            to_filter(log_config.level_for(Component::Core)),
        )
        .with_target(
            Component::Cli.target(),
            to_filter(log_config.level_for(Component::Cli)),
        )
}

/// Initialize the global subscriber; with a log file, events go to both
pub fn init(log_config: &LogConfig, format: LogFormat) -> io::Result<()> {
    let targets = targets(log_config);

    let stderr_layer = create_format_layer(format, io::stderr).with_filter(targets.clone());

    let file_layer = match &log_config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(targets),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::SystemTime)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::SystemTime)
            .with_writer(make_writer)
            .boxed(),
    }
}
