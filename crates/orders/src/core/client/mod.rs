// Client abstractions module - connection-level concerns live here

pub mod database;

// Re-export commonly used types
pub use database::{
    DatabaseError, DatabaseProvider, Disconnector, MongoConnectionManager, MongoCredentials, Pinger,
};
