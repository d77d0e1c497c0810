use ::mongodb::bson::oid::ObjectId;
use async_trait::async_trait;
use mockall::automock;

use crate::types::order::Order;

pub mod error;
/// MongoDB
pub mod mongodb;

pub use error::OrderRepositoryError;
pub use self::mongodb::MongoOrdersRepository;

/// Orders returned by `get_all_orders` when the caller gives no limit.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Order Repository Trait
///
/// The repository is the sole writer of the order aggregate. Any store can
/// back it as long as the implementation upholds two invariants: ids are
/// store-assigned (absent on create, present on update), and updates are
/// version-checked so a writer holding an outdated copy of an order cannot
/// overwrite a newer one.
#[automock]
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Persists a new order and returns the store-assigned id as hex.
    async fn create_order(&self, order: Order) -> Result<String, OrderRepositoryError>;
    /// Fetches the full aggregate for `id`.
    async fn get_order_by_id(&self, id: ObjectId) -> Result<Order, OrderRepositoryError>;
    /// Replaces the stored document for `order.id` atomically.
    async fn update_order(&self, order: Order) -> Result<(), OrderRepositoryError>;
    /// Removes the order for `id`.
    async fn delete_order_by_id(&self, id: ObjectId) -> Result<(), OrderRepositoryError>;
    /// Returns up to `limit` orders; no ordering is guaranteed.
    async fn get_all_orders(&self, limit: i64) -> Result<Vec<Order>, OrderRepositoryError>;
}
