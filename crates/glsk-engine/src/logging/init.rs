use std::sync::Once;

/// Filter variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "GLSK_LOG";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "glsk_engine=debug,glsk::diag=trace").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,

    /// Prefix each line with a millisecond timestamp.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

static INIT: Once = Once::new();

/// Picks the filter: explicit config, then `GLSK_LOG`, then `RUST_LOG`.
fn resolve_filter(config: &LoggingConfig, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    config
        .env_filter
        .clone()
        .or_else(|| lookup(LOG_ENV))
        .or_else(|| lookup("RUST_LOG"))
        .filter(|f| !f.trim().is_empty())
}

/// Initializes the global logger once. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match resolve_filter(&config, |key| std::env::var(key).ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);
        if config.timestamps {
            builder.format_timestamp_millis();
        } else {
            builder.format_timestamp(None);
        }

        // Another logger may already be installed (tests, embedding hosts).
        if builder.try_init().is_err() {
            log::debug!("global logger already set; keeping it");
            return;
        }

        log::debug!("logging initialized");
    });
}
