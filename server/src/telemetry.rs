use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::LogFormat;

/// Install the global subscriber. `RUST_LOG` sets the filter, `info` when
/// unset.
pub fn init_tracing(format: LogFormat) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(fmt::layer().with_target(false).json()).try_init(),
        LogFormat::Text => registry.with(fmt::layer()).try_init(),
    }
}
