use clap::Args;

/// Parameters of the HTTP listener.
#[derive(Debug, Clone, Args)]
pub struct ServerCliArgs {
    /// The host on which the server listens.
    #[arg(env = "ECOMMERCE_ORDERS_HOST", long, default_value = "0.0.0.0")]
    pub host: String,

    /// The port on which the server listens.
    #[arg(env = "ECOMMERCE_ORDERS_PORT", long, default_value_t = 8080)]
    pub port: u16,
}
