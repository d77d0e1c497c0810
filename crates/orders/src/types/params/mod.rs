use crate::cli::server::ServerCliArgs;

pub mod database;

pub use database::DatabaseParams;

/// Validated HTTP server parameters.
#[derive(Debug, Clone)]
pub struct ServerParams {
    pub host: String,
    pub port: u16,
}

impl From<ServerCliArgs> for ServerParams {
    fn from(args: ServerCliArgs) -> Self {
        Self { host: args.host, port: args.port }
    }
}
