use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::cli::RunCmd;
use crate::core::client::database::{MongoConnectionManager, MongoCredentials};
use crate::core::error::OrdersResult;
use crate::core::repository::{MongoOrdersRepository, OrdersRepository};
use crate::types::params::{DatabaseParams, ServerParams};

static CONFIG: OnceCell<Arc<Config>> = OnceCell::const_new();

/// The app config, assembled once at startup and injected into every
/// consumer. Holds the shared connection manager and the repository built
/// on its database handle.
pub struct Config {
    server_params: ServerParams,
    /// The one connection manager of the process
    database: Arc<MongoConnectionManager>,
    /// The order repository
    repository: Arc<dyn OrdersRepository>,
}

impl Config {
    /// Loads the side-car credentials, connects and pings the store, and
    /// wires the repository. Any failure here is fatal to startup; the
    /// process must not serve traffic without a working store.
    pub async fn setup(run_cmd: &RunCmd) -> OrdersResult<Self> {
        let database_params = DatabaseParams::from(run_cmd.database_args.clone());
        let server_params = ServerParams::from(run_cmd.server_args.clone());

        let credentials = MongoCredentials::from_side_car(&database_params.side_car_path)?;
        let database = Arc::new(MongoConnectionManager::connect(&credentials, &database_params).await?);
        let repository: Arc<dyn OrdersRepository> =
            Arc::new(MongoOrdersRepository::new(&database.database()));

        Ok(Self { server_params, database, repository })
    }

    /// Returns the server config
    pub fn server_config(&self) -> &ServerParams {
        &self.server_params
    }

    /// Returns the shared connection manager
    pub fn database(&self) -> Arc<MongoConnectionManager> {
        self.database.clone()
    }

    /// Returns the order repository
    pub fn repository(&self) -> Arc<dyn OrdersRepository> {
        self.repository.clone()
    }
}

/// One-time construction of the process-wide [`Config`]. Concurrent first
/// callers are serialized on the cell so exactly one connect and ping runs;
/// everyone observes the same instance afterwards. A failed attempt leaves
/// the cell empty so the caller may retry construction.
pub async fn init_config(run_cmd: &RunCmd) -> OrdersResult<Arc<Config>> {
    let config = CONFIG
        .get_or_try_init(|| async { Config::setup(run_cmd).await.map(Arc::new) })
        .await?;
    Ok(config.clone())
}
