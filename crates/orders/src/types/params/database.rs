use std::time::Duration;

use crate::cli::database::DatabaseCliArgs;

/// Connection timeout applied when the CLI does not override it.
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Logical database selected when the CLI does not override it.
pub const DEFAULT_DATABASE: &str = "ecommerce";

/// Validated MongoDB parameters. Every field is filled after conversion;
/// zero-valued CLI inputs fall back to the defaults above.
#[derive(Debug, Clone)]
pub struct DatabaseParams {
    /// Path of the side-car secret file holding the credentials
    pub side_car_path: String,
    pub database_name: String,
    pub connection_timeout: Duration,
    /// Mirror every command sent to the store to the logger
    pub print_queries: bool,
}

impl Default for DatabaseParams {
    fn default() -> Self {
        Self {
            side_car_path: String::new(),
            database_name: DEFAULT_DATABASE.to_string(),
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
            print_queries: false,
        }
    }
}

impl From<DatabaseCliArgs> for DatabaseParams {
    fn from(args: DatabaseCliArgs) -> Self {
        let database_name = match args.database_name {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_DATABASE.to_string(),
        };
        let connection_timeout = match args.connection_timeout_secs {
            Some(secs) if secs > 0 => Duration::from_secs(secs),
            _ => DEFAULT_CONNECTION_TIMEOUT,
        };
        Self {
            side_car_path: args.side_car_path,
            database_name,
            connection_timeout,
            print_queries: args.print_queries,
        }
    }
}
