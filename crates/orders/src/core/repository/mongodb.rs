use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};

use super::error::OrderRepositoryError;
use super::OrdersRepository;
use crate::types::order::{Order, ORDERS_COLLECTION};

/// MongoDB-backed order repository.
pub struct MongoOrdersRepository {
    collection: Collection<Order>,
}

impl MongoOrdersRepository {
    /// Binds the repository to the `orders` collection of the given
    /// logical database.
    pub fn new(database: &Database) -> Self {
        Self { collection: database.collection(ORDERS_COLLECTION) }
    }
}

#[async_trait]
impl OrdersRepository for MongoOrdersRepository {
    #[tracing::instrument(skip(self), fields(function_type = "db_call"), ret, err)]
    async fn create_order(&self, order: Order) -> Result<String, OrderRepositoryError> {
        // Ids are store-assigned; a caller-supplied one is rejected before
        // anything is written.
        if order.id.is_some() {
            return Err(OrderRepositoryError::InvalidIdOnCreate);
        }

        let result = self.collection.insert_one(&order, None).await?;
        let id = result.inserted_id.as_object_id().ok_or(OrderRepositoryError::MissingInsertedId)?;

        tracing::debug!(order_id = %id, category = "db_call", "order created");
        Ok(id.to_hex())
    }

    #[tracing::instrument(skip(self), fields(function_type = "db_call"), ret, err)]
    async fn get_order_by_id(&self, id: ObjectId) -> Result<Order, OrderRepositoryError> {
        let order = self.collection.find_one(doc! { "_id": id }, None).await?;
        tracing::debug!(order_id = %id, category = "db_call", "fetched order by id");
        order.ok_or(OrderRepositoryError::NotFound)
    }

    #[tracing::instrument(skip(self), fields(function_type = "db_call"), ret, err)]
    async fn update_order(&self, order: Order) -> Result<(), OrderRepositoryError> {
        let id = order.id.ok_or(OrderRepositoryError::InvalidIdOnUpdate)?;

        // Version-checked replace: the filter pins the version the caller
        // read, the replacement carries the bumped one. A missing id and a
        // stale version are indistinguishable here, both match nothing.
        let filter = doc! { "_id": id, "version": order.version };
        let mut replacement = order;
        replacement.version += 1;
        replacement.updated_at = Utc::now().round_subsecs(0);

        let result = self.collection.replace_one(filter, &replacement, None).await?;
        if result.matched_count == 0 {
            tracing::warn!(order_id = %id, category = "db_call", "failed to update order, id unknown or version outdated");
            return Err(OrderRepositoryError::InvalidIdOnUpdate);
        }
        tracing::debug!(order_id = %id, category = "db_call", "order updated");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(function_type = "db_call"), ret, err)]
    async fn delete_order_by_id(&self, id: ObjectId) -> Result<(), OrderRepositoryError> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        if result.deleted_count == 0 {
            return Err(OrderRepositoryError::NotFound);
        }
        tracing::debug!(order_id = %id, category = "db_call", "order deleted");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(function_type = "db_call"), err)]
    async fn get_all_orders(&self, limit: i64) -> Result<Vec<Order>, OrderRepositoryError> {
        let options = FindOptions::builder().limit(limit).build();
        let orders: Vec<Order> = self.collection.find(None, options).await?.try_collect().await?;
        tracing::debug!(order_count = orders.len(), category = "db_call", "retrieved orders");
        Ok(orders)
    }
}
