use std::time::Duration;

use mongodb::bson::oid::ObjectId;
use mongodb::options::ClientOptions;
use mongodb::Client;
use rstest::rstest;

use crate::core::client::database::{MongoConnectionManager, MongoCredentials};
use crate::core::repository::{MongoOrdersRepository, OrderRepositoryError, OrdersRepository};
use crate::tests::utils::{build_order, build_product};
use crate::types::order::OrderStatus;
use crate::types::params::DatabaseParams;

/// A repository over a client that never touched the network. The driver
/// connects lazily, so validation failures that happen before any store
/// call can be exercised without a server.
async fn detached_repository() -> MongoOrdersRepository {
    let options = ClientOptions::parse("mongodb://localhost:27017").await.unwrap();
    let client = Client::with_options(options).unwrap();
    MongoOrdersRepository::new(&client.database("ecommerce-test"))
}

async fn live_repository() -> MongoOrdersRepository {
    let credentials =
        MongoCredentials { host_name: "localhost".to_string(), port: "27017".to_string(), ..Default::default() };
    let params = DatabaseParams {
        side_car_path: String::new(),
        database_name: "ecommerce-test".to_string(),
        connection_timeout: Duration::from_secs(2),
        print_queries: false,
    };
    let manager = MongoConnectionManager::connect(&credentials, &params).await.unwrap();
    MongoOrdersRepository::new(&manager.database())
}

#[rstest]
#[tokio::test]
async fn create_rejects_a_preset_id_without_writing() {
    let repository = detached_repository().await;
    let mut order = build_order("user@example.com", vec![build_product("widget", 10.0, 1)]);
    order.id = Some(ObjectId::new());

    // Rejected before any store call; a detached client would otherwise
    // hang on server selection.
    let result = repository.create_order(order).await;
    assert!(matches!(result, Err(OrderRepositoryError::InvalidIdOnCreate)));
}

#[rstest]
#[tokio::test]
async fn update_rejects_a_missing_id_without_writing() {
    let repository = detached_repository().await;
    let order = build_order("user@example.com", vec![build_product("widget", 10.0, 1)]);

    let result = repository.update_order(order).await;
    assert!(matches!(result, Err(OrderRepositoryError::InvalidIdOnUpdate)));
}

#[rstest]
#[tokio::test]
#[ignore = "requires a running MongoDB on localhost:27017"]
async fn create_then_get_preserves_the_aggregate() {
    let repository = live_repository().await;
    let order =
        build_order("user@example.com", vec![build_product("widget", 10.0, 1), build_product("gadget", 5.0, 2)]);
    assert_eq!(order.total_amount, 20.0);

    let id = repository.create_order(order.clone()).await.unwrap();
    assert_eq!(id.len(), 24);

    let stored = repository.get_order_by_id(ObjectId::parse_str(&id).unwrap()).await.unwrap();
    assert_eq!(stored.products, order.products);
    assert_eq!(stored.total_amount, 20.0);
    assert_eq!(stored.status, OrderStatus::Pending);
    assert_eq!(stored.user, order.user);
}

#[rstest]
#[tokio::test]
#[ignore = "requires a running MongoDB on localhost:27017"]
async fn get_by_id_of_an_unknown_order_is_not_found() {
    let repository = live_repository().await;
    let result = repository.get_order_by_id(ObjectId::new()).await;
    assert!(matches!(result, Err(OrderRepositoryError::NotFound)));
}

#[rstest]
#[tokio::test]
#[ignore = "requires a running MongoDB on localhost:27017"]
async fn delete_is_not_idempotent_by_design() {
    let repository = live_repository().await;
    let order = build_order("user@example.com", vec![build_product("widget", 10.0, 1)]);

    let id = repository.create_order(order).await.unwrap();
    let order_id = ObjectId::parse_str(&id).unwrap();

    repository.delete_order_by_id(order_id).await.unwrap();
    let second = repository.delete_order_by_id(order_id).await;
    assert!(matches!(second, Err(OrderRepositoryError::NotFound)));
}

#[rstest]
#[tokio::test]
#[ignore = "requires a running MongoDB on localhost:27017"]
async fn update_of_an_unknown_id_is_invalid_id_on_update() {
    let repository = live_repository().await;
    let mut order = build_order("user@example.com", vec![build_product("widget", 10.0, 1)]);
    order.id = Some(ObjectId::new());

    let result = repository.update_order(order).await;
    assert!(matches!(result, Err(OrderRepositoryError::InvalidIdOnUpdate)));
}

#[rstest]
#[tokio::test]
#[ignore = "requires a running MongoDB on localhost:27017"]
async fn update_bumps_the_version_and_rejects_stale_writers() {
    let repository = live_repository().await;
    let order = build_order("user@example.com", vec![build_product("widget", 10.0, 1)]);

    let id = repository.create_order(order).await.unwrap();
    let order_id = ObjectId::parse_str(&id).unwrap();

    let mut first_writer = repository.get_order_by_id(order_id).await.unwrap();
    let mut second_writer = first_writer.clone();

    first_writer.status = OrderStatus::Processing;
    repository.update_order(first_writer).await.unwrap();

    let stored = repository.get_order_by_id(order_id).await.unwrap();
    assert_eq!(stored.version, 2);
    assert_eq!(stored.status, OrderStatus::Processing);

    // The second writer still holds version 1 and must lose.
    second_writer.status = OrderStatus::Cancelled;
    let stale = repository.update_order(second_writer).await;
    assert!(matches!(stale, Err(OrderRepositoryError::InvalidIdOnUpdate)));
}

#[rstest]
#[tokio::test]
#[ignore = "requires a running MongoDB on localhost:27017"]
async fn get_all_respects_the_limit() {
    let repository = live_repository().await;
    for _ in 0..5 {
        let order = build_order("user@example.com", vec![build_product("widget", 10.0, 1)]);
        repository.create_order(order).await.unwrap();
    }

    let orders = repository.get_all_orders(4).await.unwrap();
    assert_eq!(orders.len(), 4);
}
