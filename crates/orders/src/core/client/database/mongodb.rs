use std::sync::Arc;
use std::time::Duration;

use mongodb::bson::doc;
use mongodb::event::command::{CommandEventHandler, CommandStartedEvent};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tokio::sync::Mutex;

use super::credentials::MongoCredentials;
use super::error::DatabaseError;
use super::{DatabaseProvider, Disconnector, Pinger};
use crate::types::params::DatabaseParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConnectionState {
    Connected,
    Disconnected,
}

/// Mirrors every command sent to the store to the logger. Registered only
/// when `print_queries` is enabled; purely observational.
struct QueryLogger;

impl CommandEventHandler for QueryLogger {
    fn handle_command_started_event(&self, event: CommandStartedEvent) {
        tracing::info!(db_query = %event.command, command = %event.command_name, "database command started");
    }
}

/// Owns the MongoDB client and the logical database selected on it.
/// Constructed exactly once per process; a manager only exists in the
/// connected state, and `disconnect` is the sole transition out of it.
pub struct MongoConnectionManager {
    connection_url: String,
    client: Client,
    database: Database,
    connection_timeout: Duration,
    state: Mutex<ConnectionState>,
}

impl MongoConnectionManager {
    /// Builds the connection string, opens a client with the configured
    /// timeout and pings the deployment before handing the manager out. A
    /// freshly opened client is not proof of a reachable store, so a
    /// failed initial probe discards the manager. No retries here; the
    /// caller decides whether to construct again.
    pub async fn connect(
        credentials: &MongoCredentials,
        params: &DatabaseParams,
    ) -> Result<Self, DatabaseError> {
        let connection_url = credentials.connection_url();
        if connection_url.is_empty() {
            return Err(DatabaseError::InvalidConnectionUrl);
        }
        tracing::info!(url = %credentials.masked_connection_url(), "connecting to the database");

        let mut options = ClientOptions::parse(&connection_url).await.map_err(DatabaseError::ClientInit)?;
        options.connect_timeout = Some(params.connection_timeout);
        options.server_selection_timeout = Some(params.connection_timeout);
        if params.print_queries {
            options.command_event_handler = Some(Arc::new(QueryLogger));
        }

        let client = Client::with_options(options).map_err(DatabaseError::ClientInit)?;
        let database = client.database(&params.database_name);

        let manager = Self {
            connection_url,
            client,
            database,
            connection_timeout: params.connection_timeout,
            state: Mutex::new(ConnectionState::Connected),
        };
        if let Err(error) = manager.ping().await {
            return Err(DatabaseError::ConnectionEstablish(error.to_string()));
        }
        Ok(manager)
    }

    /// The rendered connection string the client was opened with.
    pub fn connection_url(&self) -> &str {
        &self.connection_url
    }

    /// The logical database handle. Cheap to clone; safe for concurrent
    /// use, the driver pools the physical connections underneath.
    pub fn database(&self) -> Database {
        self.database.clone()
    }

    /// Bounded health probe against the deployment.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        let admin = self.client.database("admin");
        let probe = admin.run_command(doc! { "ping": 1 }, None);
        match tokio::time::timeout(self.connection_timeout, probe).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(error)) => {
                tracing::error!(error = %error, "failed to ping the database");
                Err(DatabaseError::PingDatabase(error.to_string()))
            }
            Err(_) => {
                tracing::error!(timeout = ?self.connection_timeout, "database ping timed out");
                Err(DatabaseError::PingDatabase(format!(
                    "no reply within {:?}",
                    self.connection_timeout
                )))
            }
        }
    }

    /// Releases all pooled connections. Calling it on an already
    /// disconnected manager fails closed with `ConnectionLeak`; callers on
    /// the shutdown path log that and continue regardless.
    pub async fn disconnect(&self) -> Result<(), DatabaseError> {
        {
            let mut state = self.state.lock().await;
            if *state == ConnectionState::Disconnected {
                return Err(DatabaseError::ConnectionLeak(
                    "manager is not connected".to_string(),
                ));
            }
            *state = ConnectionState::Disconnected;
        }
        self.client.clone().shutdown().await;
        tracing::info!("disconnected from the database");
        Ok(())
    }
}

impl DatabaseProvider for MongoConnectionManager {
    fn database(&self) -> Database {
        MongoConnectionManager::database(self)
    }
}

#[async_trait::async_trait]
impl Pinger for MongoConnectionManager {
    async fn ping(&self) -> Result<(), DatabaseError> {
        MongoConnectionManager::ping(self).await
    }
}

#[async_trait::async_trait]
impl Disconnector for MongoConnectionManager {
    async fn disconnect(&self) -> Result<(), DatabaseError> {
        MongoConnectionManager::disconnect(self).await
    }
}
