use async_trait::async_trait;
use mockall::automock;

pub mod credentials;
pub mod error;
/// MongoDB
pub mod mongodb;

pub use credentials::MongoCredentials;
pub use error::DatabaseError;
pub use self::mongodb::MongoConnectionManager;

/// Access to the logical database selected on the connection. Kept narrow
/// so consumers of the handle never see the client lifecycle.
pub trait DatabaseProvider: Send + Sync {
    fn database(&self) -> ::mongodb::Database;
}

/// Health probing, the only capability the readiness endpoint needs.
#[automock]
#[async_trait]
pub trait Pinger: Send + Sync {
    async fn ping(&self) -> Result<(), DatabaseError>;
}

/// Connection teardown, the only capability the shutdown path needs.
#[automock]
#[async_trait]
pub trait Disconnector: Send + Sync {
    async fn disconnect(&self) -> Result<(), DatabaseError>;
}
