use thiserror::Error;

/// Failures of the connection layer: credential acquisition, connection
/// string rendering and the client lifecycle. Callers branch on the
/// variant, never on the message text.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The side-car secret file is missing or unreadable
    #[error("failed to read credentials side-car file {path}: {source}")]
    SideCarFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The side-car secret file could not be decoded into credentials
    #[error("failed to parse credentials side-car file: {0}")]
    SideCarFileFormat(#[from] serde_json::Error),

    /// The rendered connection string is empty, no usable host
    #[error("failed to connect to the database: the connection string is invalid")]
    InvalidConnectionUrl,

    /// The underlying client could not be constructed
    #[error("failed to initialize database client: {0}")]
    ClientInit(#[source] mongodb::error::Error),

    /// The client was built but the initial health probe failed
    #[error("failed to establish connection to the database: {0}")]
    ConnectionEstablish(String),

    /// A later health probe failed
    #[error("failed to ping the database: {0}")]
    PingDatabase(String),

    /// Disconnect reported an error; pooled connections possibly retained
    #[error("unable to disconnect from the database, connection leak: {0}")]
    ConnectionLeak(String),
}
