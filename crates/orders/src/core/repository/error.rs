use thiserror::Error;

/// Failures of the order repository. The variant is the contract; the HTTP
/// layer maps each kind to a status code without reading messages.
#[derive(Error, Debug)]
pub enum OrderRepositoryError {
    /// The caller supplied an identifier on create; the store assigns ids
    #[error("order id must not be set on create")]
    InvalidIdOnCreate,

    /// Update target has no id, or no stored document matched the write
    #[error("order id is missing or does not match a stored order")]
    InvalidIdOnUpdate,

    /// The requested order does not exist
    #[error("order not found")]
    NotFound,

    /// The store accepted the insert but returned no usable identifier
    #[error("store did not return an object id for the inserted order")]
    MissingInsertedId,

    /// The order could not be encoded as a store document
    #[error("failed to serialize order document: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    /// Transport or server-side failure reported by the driver
    #[error("database driver error: {0}")]
    Driver(#[from] mongodb::error::Error),
}
