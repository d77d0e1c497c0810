use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{middleware, Extension, Json, Router};
use chrono::{SubsecRound, Utc};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::core::repository::{OrdersRepository, DEFAULT_PAGE_SIZE};
use crate::server::error::{codes, ApiError};
use crate::server::middleware::{request_id_middleware, RequestId};
use crate::server::types::{OrderInput, OrderResponse, OrderUpdateInput};
use crate::types::order::{calculate_total_amount, Order, OrderStatus, OrderUpdate, Product};

/// Largest number of orders a single list request may ask for.
pub const MAX_PAGE_SIZE: i64 = 100;

type Repository = Arc<dyn OrdersRepository>;

/// Routes of the order resource. The repository arrives as a trait object
/// so the tests can drive the routes against a mock.
pub fn order_router(repository: Repository) -> Router {
    Router::new()
        .route("/ecommerce/v1/orders", post(create_order).get(get_all_orders))
        .route(
            "/ecommerce/v1/orders/:id",
            get(get_order_by_id).put(update_order).delete(delete_order_by_id),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(repository)
}

async fn create_order(
    State(repository): State<Repository>,
    Extension(RequestId(debug_id)): Extension<RequestId>,
    payload: Result<Json<OrderInput>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            codes::ORDER_CREATE_INVALID_INPUT,
            format!("Invalid order request body: {rejection}"),
            &debug_id,
        )
    })?;
    if input.products.is_empty() {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            codes::ORDER_CREATE_INVALID_INPUT,
            "an order needs at least one product",
            &debug_id,
        ));
    }

    let now = Utc::now().round_subsecs(0);
    let products: Vec<Product> = input.products.into_iter().map(Product::from).collect();
    let order = Order {
        id: None,
        version: 1,
        created_at: now,
        updated_at: now,
        total_amount: calculate_total_amount(&products),
        products,
        user: input.user,
        status: OrderStatus::Pending,
        updates: vec![],
    };

    let id = repository
        .create_order(order.clone())
        .await
        .map_err(|error| ApiError::from_create_error(error, &debug_id))?;

    let mut response = OrderResponse::from(order);
    response.order_id = id;
    Ok((StatusCode::CREATED, Json(response)))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    limit: Option<i64>,
}

async fn get_all_orders(
    State(repository): State<Repository>,
    Extension(RequestId(debug_id)): Extension<RequestId>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let limit = match query {
        Ok(Query(ListQuery { limit })) => limit.unwrap_or(DEFAULT_PAGE_SIZE),
        Err(_) => return Err(invalid_limit(&debug_id)),
    };
    if !(1..=MAX_PAGE_SIZE).contains(&limit) {
        return Err(invalid_limit(&debug_id));
    }

    let orders = repository
        .get_all_orders(limit)
        .await
        .map_err(|error| ApiError::from_get_error(error, &debug_id))?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

fn invalid_limit(debug_id: &str) -> ApiError {
    ApiError::new(
        StatusCode::BAD_REQUEST,
        codes::ORDER_GET_INVALID_PARAMS,
        format!("Integer value within 1 and {MAX_PAGE_SIZE} is expected for limit query param"),
        debug_id,
    )
}

async fn get_order_by_id(
    State(repository): State<Repository>,
    Extension(RequestId(debug_id)): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order_id = ObjectId::parse_str(&id).map_err(|_| {
        ApiError::new(StatusCode::BAD_REQUEST, codes::ORDER_GET_INVALID_PARAMS, "Invalid order id", &debug_id)
    })?;
    let order = repository
        .get_order_by_id(order_id)
        .await
        .map_err(|error| ApiError::from_get_error(error, &debug_id))?;
    Ok(Json(order.into()))
}

async fn update_order(
    State(repository): State<Repository>,
    Extension(RequestId(debug_id)): Extension<RequestId>,
    Path(id): Path<String>,
    payload: Result<Json<OrderUpdateInput>, JsonRejection>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order_id = ObjectId::parse_str(&id).map_err(|_| {
        ApiError::new(StatusCode::BAD_REQUEST, codes::ORDER_UPDATE_INVALID_INPUT, "Invalid order id", &debug_id)
    })?;
    let Json(input) = payload.map_err(|rejection| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            codes::ORDER_UPDATE_INVALID_INPUT,
            format!("Invalid order request body: {rejection}"),
            &debug_id,
        )
    })?;

    let mut order = repository
        .get_order_by_id(order_id)
        .await
        .map_err(|error| ApiError::from_update_error(error, &debug_id))?;

    order.status = input.status;
    if let Some(products) = input.products {
        let products: Vec<Product> = products.into_iter().map(Product::from).collect();
        order.total_amount = calculate_total_amount(&products);
        order.products = products;
    }
    if input.notes.is_some() || input.handle_by.is_some() {
        order.updates.push(OrderUpdate {
            update_at: Utc::now().round_subsecs(0),
            notes: input.notes.unwrap_or_default(),
            handle_by: input.handle_by.unwrap_or_default(),
        });
    }

    repository
        .update_order(order)
        .await
        .map_err(|error| ApiError::from_update_error(error, &debug_id))?;

    // The store bumped the version; read the document back so the client
    // sees the state it can base the next update on.
    let refreshed = repository
        .get_order_by_id(order_id)
        .await
        .map_err(|error| ApiError::from_update_error(error, &debug_id))?;
    Ok(Json(refreshed.into()))
}

async fn delete_order_by_id(
    State(repository): State<Repository>,
    Extension(RequestId(debug_id)): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let order_id = ObjectId::parse_str(&id).map_err(|_| {
        ApiError::new(StatusCode::BAD_REQUEST, codes::ORDER_DELETE_INVALID_ID, "Invalid order id", &debug_id)
    })?;
    repository
        .delete_order_by_id(order_id)
        .await
        .map_err(|error| ApiError::from_delete_error(error, &debug_id))?;
    Ok(StatusCode::NO_CONTENT)
}
