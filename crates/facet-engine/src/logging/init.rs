use std::sync::Once;

use env_logger::{Builder, Env, WriteStyle};

/// What the gallery binary logs at when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Logger configuration.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Filter string in `env_logger` syntax ("facet_gallery=debug,wgpu=warn").
    /// When set it overrides `RUST_LOG`; when `None` the environment decides,
    /// falling back to [`DEFAULT_FILTER`].
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
}

static LOGGER: Once = Once::new();

/// Installs the global `env_logger` backend. Safe to call from any entry
/// point; only the first call takes effect.
pub fn init_logging(config: LoggingConfig) {
    LOGGER.call_once(|| {
        let mut builder = match &config.env_filter {
            Some(filter) => {
                let mut b = Builder::new();
                b.parse_filters(filter);
                b
            }
            None => Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)),
        };
        builder.write_style(config.write_style).init();
        log::trace!("logger installed");
    });
}
