use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::LogArgs;

/// Installs the global tracing subscriber. `RUST_LOG` wins over `--log-filter`
/// when set.
pub fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.filter.clone()));

    let registry = tracing_subscriber::registry().with(filter);

    if args.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
