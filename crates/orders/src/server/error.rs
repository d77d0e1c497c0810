use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::core::repository::OrderRepositoryError;

pub const UNEXPECTED_ERROR_MESSAGE: &str = "unexpected error occurred";

/// Stable error codes carried in the envelope so clients can branch
/// without parsing messages.
pub mod codes {
    pub const ORDER_GET_INVALID_PARAMS: &str = "orders_get_invalid_params";
    pub const ORDER_GET_NOT_FOUND: &str = "orders_get_not_found";
    pub const ORDER_GET_SERVER_ERROR: &str = "orders_get_server_error";

    pub const ORDER_CREATE_INVALID_INPUT: &str = "orders_create_invalid_input";
    pub const ORDER_CREATE_SERVER_ERROR: &str = "orders_create_server_error";

    pub const ORDER_UPDATE_INVALID_INPUT: &str = "orders_update_invalid_input";
    pub const ORDER_UPDATE_NOT_FOUND: &str = "orders_update_not_found";
    pub const ORDER_UPDATE_SERVER_ERROR: &str = "orders_update_server_error";

    pub const ORDER_DELETE_INVALID_ID: &str = "orders_delete_invalid_order_id";
    pub const ORDER_DELETE_NOT_FOUND: &str = "orders_delete_not_found";
    pub const ORDER_DELETE_SERVER_ERROR: &str = "orders_delete_server_error";
}

/// The JSON error envelope every failed request renders.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "httpStatusCode")]
    pub http_status_code: u16,
    pub message: String,
    #[serde(rename = "debugId")]
    pub debug_id: String,
    #[serde(rename = "errorCode")]
    pub error_code: String,
}

impl ApiError {
    pub fn new(status: StatusCode, error_code: &str, message: impl Into<String>, debug_id: &str) -> Self {
        Self {
            http_status_code: status.as_u16(),
            message: message.into(),
            debug_id: debug_id.to_string(),
            error_code: error_code.to_string(),
        }
    }

    pub fn from_create_error(error: OrderRepositoryError, debug_id: &str) -> Self {
        match error {
            OrderRepositoryError::InvalidIdOnCreate => Self::new(
                StatusCode::BAD_REQUEST,
                codes::ORDER_CREATE_INVALID_INPUT,
                "order id must not be supplied on create",
                debug_id,
            ),
            _ => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                codes::ORDER_CREATE_SERVER_ERROR,
                UNEXPECTED_ERROR_MESSAGE,
                debug_id,
            ),
        }
    }

    pub fn from_get_error(error: OrderRepositoryError, debug_id: &str) -> Self {
        match error {
            OrderRepositoryError::NotFound => {
                Self::new(StatusCode::NOT_FOUND, codes::ORDER_GET_NOT_FOUND, "order not found", debug_id)
            }
            _ => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                codes::ORDER_GET_SERVER_ERROR,
                UNEXPECTED_ERROR_MESSAGE,
                debug_id,
            ),
        }
    }

    pub fn from_update_error(error: OrderRepositoryError, debug_id: &str) -> Self {
        match error {
            OrderRepositoryError::InvalidIdOnUpdate | OrderRepositoryError::NotFound => Self::new(
                StatusCode::NOT_FOUND,
                codes::ORDER_UPDATE_NOT_FOUND,
                "order does not exist or was modified concurrently",
                debug_id,
            ),
            _ => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                codes::ORDER_UPDATE_SERVER_ERROR,
                UNEXPECTED_ERROR_MESSAGE,
                debug_id,
            ),
        }
    }

    pub fn from_delete_error(error: OrderRepositoryError, debug_id: &str) -> Self {
        match error {
            OrderRepositoryError::NotFound => {
                Self::new(StatusCode::NOT_FOUND, codes::ORDER_DELETE_NOT_FOUND, "order not found", debug_id)
            }
            _ => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                codes::ORDER_DELETE_SERVER_ERROR,
                UNEXPECTED_ERROR_MESSAGE,
                debug_id,
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        tracing::error!(
            http_status_code = self.http_status_code,
            error_code = %self.error_code,
            debug_id = %self.debug_id,
            "{}",
            self.message
        );
        (status, Json(self)).into_response()
    }
}
