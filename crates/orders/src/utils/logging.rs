use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber. `RUST_LOG` wins over the
/// configured directives when set. Must run once, before anything logs.
pub fn init_logging(directives: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
    tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).with(filter).init();
}
