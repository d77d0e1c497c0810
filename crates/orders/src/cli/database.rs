use clap::Args;

/// Parameters used to config MongoDB.
#[derive(Debug, Clone, Args)]
pub struct DatabaseCliArgs {
    /// Path of the side-car secret file holding the database credentials.
    #[arg(env = "ECOMMERCE_ORDERS_MONGODB_SIDECAR_PATH", long = "mongodb-side-car-path")]
    pub side_car_path: String,

    /// The name of the logical database.
    #[arg(env = "ECOMMERCE_ORDERS_DATABASE_NAME", long = "mongodb-database-name", default_value = Some("ecommerce"))]
    pub database_name: Option<String>,

    /// Connection timeout in seconds.
    #[arg(env = "ECOMMERCE_ORDERS_CONNECTION_TIMEOUT", long = "mongodb-connection-timeout", default_value = Some("10"))]
    pub connection_timeout_secs: Option<u64>,

    /// Mirror every database command to the logger.
    #[arg(env = "ECOMMERCE_ORDERS_PRINT_DB_QUERIES", long = "print-db-queries")]
    pub print_queries: bool,
}
