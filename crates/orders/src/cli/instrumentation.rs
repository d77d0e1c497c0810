use clap::Args;

/// Parameters used to config logging.
#[derive(Debug, Clone, Args)]
pub struct InstrumentationCliArgs {
    /// Log directives applied when RUST_LOG is not set.
    #[arg(env = "ECOMMERCE_ORDERS_LOG_LEVEL", long, default_value = "info")]
    pub log_level: String,
}
