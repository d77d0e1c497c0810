use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// Name of the MongoDB collection holding order documents.
pub const ORDERS_COLLECTION: &str = "orders";

/// Lifecycle states of an order. The wire names carry the `Order` prefix
/// for compatibility with documents written by earlier deployments.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Order received, nothing has happened yet
    #[serde(rename = "OrderPending")]
    Pending,
    /// Order picked up by fulfilment
    #[serde(rename = "OrderProcessing")]
    Processing,
    /// Order fulfilled
    #[serde(rename = "OrderCompleted")]
    Completed,
    /// Order cancelled before fulfilment
    #[serde(rename = "OrderCancelled")]
    Cancelled,
    /// Order handed over to the customer
    #[serde(rename = "OrderDelivered")]
    Delivered,
}

/// The order aggregate. An order owns its embedded products and audit
/// updates; the store is the sole authority for `id` and `version`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Order {
    /// Store-assigned identifier. Must be `None` on create and `Some` on
    /// update; the repository rejects anything else.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Document version, bumped by the store on every successful update
    pub version: i64,
    /// Timestamp when the order was created
    #[serde(rename = "createdAt", with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    /// Timestamp when the order was last written
    #[serde(rename = "updatedAt", with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    /// Products belonging to this order, in the order they were added
    pub products: Vec<Product>,
    /// Identifier of the user that placed the order
    pub user: String,
    /// Sum over products of price * quantity, computed by the caller
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
    pub status: OrderStatus,
    /// Audit trail, append-only
    #[serde(default)]
    pub updates: Vec<OrderUpdate>,
}

/// A product line embedded in an order. No identity of its own.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    #[serde(rename = "updateAt", with = "chrono_datetime_as_bson_datetime")]
    pub update_at: DateTime<Utc>,
    pub price: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub remarks: String,
    pub quantity: u64,
}

/// A single audit entry appended over the order's life; never mutated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderUpdate {
    #[serde(rename = "updateAt", with = "chrono_datetime_as_bson_datetime")]
    pub update_at: DateTime<Utc>,
    pub notes: String,
    #[serde(rename = "handleBy")]
    pub handle_by: String,
}

/// Derives the order total from its product lines. Callers are expected to
/// run this before handing an order to the repository; the repository
/// stores whatever it is given.
pub fn calculate_total_amount(products: &[Product]) -> f64 {
    products.iter().map(|product| product.price * product.quantity as f64).sum()
}
