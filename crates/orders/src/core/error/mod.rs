use thiserror::Error;

use crate::core::client::database::DatabaseError;
use crate::core::repository::OrderRepositoryError;

pub type OrdersResult<T> = Result<T, OrdersError>;

/// Top-level error of the service, aggregating the closed taxonomies of
/// the layers below so `main` and the tests can match exhaustively.
#[derive(Error, Debug)]
pub enum OrdersError {
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("repository error: {0}")]
    Repository(#[from] OrderRepositoryError),

    #[error("configuration error: {0}")]
    Config(String),
}
