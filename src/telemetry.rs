use tracing_subscriber::{fmt, EnvFilter};

use crate::settings::LogFormat;

const DEFAULT_FILTER: &str = "info,sqlx=warn,actix_web=info";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = fmt().with_env_filter(filter).with_target(true);

    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };

    if let Err(e) = result {
        eprintln!("Tracing subscriber already installed: {}", e);
    }
}
