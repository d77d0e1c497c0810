use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::types::order::{Order, OrderStatus, OrderUpdate, Product};

fn iso(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Body of `POST /ecommerce/v1/orders`.
#[derive(Debug, Deserialize)]
pub struct OrderInput {
    pub user: String,
    pub products: Vec<ProductInput>,
}

#[derive(Debug, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub quantity: u64,
}

impl From<ProductInput> for Product {
    fn from(input: ProductInput) -> Self {
        Product {
            name: input.name,
            update_at: Utc::now(),
            price: input.price,
            status: String::new(),
            remarks: String::new(),
            quantity: input.quantity,
        }
    }
}

/// Body of `PUT /ecommerce/v1/orders/:id`. The id and the stored version
/// come from the path and the stored document, never from the body.
#[derive(Debug, Deserialize)]
pub struct OrderUpdateInput {
    pub status: OrderStatus,
    /// Replaces the product list when present
    #[serde(default)]
    pub products: Option<Vec<ProductInput>>,
    /// Appended to the audit trail when present
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, rename = "handleBy")]
    pub handle_by: Option<String>,
}

/// An order as rendered to API clients; timestamps are ISO-8601 strings.
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub version: i64,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    pub products: Vec<ProductResponse>,
    pub user: String,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub updates: Vec<OrderUpdateResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub name: String,
    #[serde(rename = "updateAt")]
    pub update_at: String,
    pub price: f64,
    pub status: String,
    pub remarks: String,
    pub quantity: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderUpdateResponse {
    #[serde(rename = "updateAt")]
    pub update_at: String,
    pub notes: String,
    #[serde(rename = "handleBy")]
    pub handle_by: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            update_at: iso(product.update_at),
            price: product.price,
            status: product.status,
            remarks: product.remarks,
            quantity: product.quantity,
        }
    }
}

impl From<OrderUpdate> for OrderUpdateResponse {
    fn from(update: OrderUpdate) -> Self {
        Self { update_at: iso(update.update_at), notes: update.notes, handle_by: update.handle_by }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.id.map(|id| id.to_hex()).unwrap_or_default(),
            version: order.version,
            created_at: iso(order.created_at),
            updated_at: iso(order.updated_at),
            products: order.products.into_iter().map(Into::into).collect(),
            user: order.user,
            total_amount: order.total_amount,
            status: order.status,
            updates: order.updates.into_iter().map(Into::into).collect(),
        }
    }
}

/// Payload of the readiness endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub database: String,
}

impl StatusResponse {
    pub fn up() -> Self {
        Self { status: "UP".to_string(), database: "UP".to_string() }
    }

    pub fn down() -> Self {
        Self { status: "DOWN".to_string(), database: "DOWN".to_string() }
    }
}
