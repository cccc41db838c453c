use tracing::level_filters::LevelFilter;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            format: LogFormat::default(),
        }
    }
}

/// Builds the subscriber for a run. Nothing is installed globally; the caller
/// enters it with `tracing::dispatcher::with_default`.
pub fn init_logging(config: &LogConfig) -> Dispatch {
    build_dispatch(config, std::io::stderr)
}

fn build_dispatch<W>(config: &LogConfig, writer: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::new(config.level.to_string());
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => Dispatch::new(
            registry.with(
                fmt::layer()
                    .pretty()
                    .with_writer(writer)
                    .with_target(false),
            ),
        ),
        LogFormat::Compact => Dispatch::new(
            registry.with(
                fmt::layer()
                    .compact()
                    .with_writer(writer)
                    .with_target(false),
            ),
        ),
        LogFormat::Json => Dispatch::new(registry.with(fmt::layer().json().with_writer(writer))),
    }
}
