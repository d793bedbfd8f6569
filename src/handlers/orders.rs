use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::order_service::OrderService;
use crate::domain::order::{
    Customer, CustomerOrderView, DeleteResult, OrderDetails, OrderInput, OrderItem,
};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderRequest {
    pub order_date: DateTime<Utc>,
    pub customer_id: i32,
    pub order_item_id: i32,
}

impl From<OrderRequest> for OrderInput {
    fn from(body: OrderRequest) -> Self {
        OrderInput {
            order_date: body.order_date,
            customer_id: body.customer_id,
            order_item_id: body.order_item_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    pub id: i32,
    pub item_id: i32,
    pub quantity: i32,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(oi: OrderItem) -> Self {
        Self {
            id: oi.id,
            item_id: oi.item_id,
            quantity: oi.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub order_date: String,
    pub customer_id: i32,
    pub order_item_id: i32,
    pub customer: CustomerResponse,
    pub order_item: OrderItemResponse,
}

impl From<OrderDetails> for OrderResponse {
    fn from(o: OrderDetails) -> Self {
        Self {
            id: o.id,
            order_date: o.order_date.to_rfc3339(),
            customer_id: o.customer.id,
            order_item_id: o.order_item.id,
            customer: o.customer.into(),
            order_item: o.order_item.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerOrderViewResponse {
    pub customer_id: i32,
    pub customer_name: String,
    pub item_name: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub price: String,
    pub quantity: i32,
    pub order_date: String,
}

impl From<CustomerOrderView> for CustomerOrderViewResponse {
    fn from(v: CustomerOrderView) -> Self {
        Self {
            customer_id: v.customer_id,
            customer_name: v.customer_name,
            item_name: v.item_name,
            price: v.price.to_string(),
            quantity: v.quantity,
            order_date: v.order_date.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderResponse {
    pub id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

impl From<DeleteResult> for HttpResponse {
    fn from(result: DeleteResult) -> Self {
        let status = StatusCode::from_u16(result.status.code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(DeleteResponse {
            success: result.success,
            message: result.message,
        })
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders
///
/// Returns every order with its customer and order item.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders", body = [OrderResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.list_orders())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /orders/view
///
/// Flattened order/customer/item rows, one per order line.
#[utoipa::path(
    get,
    path = "/orders/view",
    responses(
        (status = 200, description = "Order view rows", body = [CustomerOrderViewResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_order_views(service: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let rows = web::block(move || service.list_order_views())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<CustomerOrderViewResponse> =
        rows.into_iter().map(CustomerOrderViewResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<OrderService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let order = web::block(move || service.get_order(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// POST /orders
///
/// Creates an order and returns it with its customer and order item.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Invalid order data"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<OrderService>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let input = OrderInput::from(body.into_inner());

    let order = web::block(move || service.create_order(input))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// POST /orders/return-id
///
/// Creates an order and returns only its generated id.
#[utoipa::path(
    post,
    path = "/orders/return-id",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = CreateOrderResponse),
        (status = 400, description = "Invalid order data"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order_returning_id(
    service: web::Data<OrderService>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let input = OrderInput::from(body.into_inner());

    let id = web::block(move || service.create_order_returning_id(input))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(CreateOrderResponse { id }))
}

/// PUT /orders/{id}
///
/// Replaces the date, customer and order item of an existing order.
#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 400, description = "Invalid order data"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn update_order(
    service: web::Data<OrderService>,
    path: web::Path<i32>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let input = OrderInput::from(body.into_inner());

    let order = web::block(move || service.update_order(id, input))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// DELETE /orders/{id}
///
/// Always answers with `{success, message}`; the status tells bad ids and
/// unknown orders (400) apart from store faults (500). The id is taken as raw
/// text so that an unparsable id still gets the structured 400.
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order deleted", body = DeleteResponse),
        (status = 400, description = "Invalid id or order not found", body = DeleteResponse),
        (status = 500, description = "Store fault", body = DeleteResponse),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    service: web::Data<OrderService>,
    path: web::Path<String>,
) -> HttpResponse {
    let Ok(id) = path.trim().parse::<i32>() else {
        return DeleteResult::rejected("Invalid Order Id").into();
    };

    match web::block(move || service.delete_order(id)).await {
        Ok(result) => result.into(),
        Err(e) => {
            log::error!("delete of order {id} did not complete: {e}");
            DeleteResult::failed("Failed to delete order").into()
        }
    }
}

/// DELETE /orders
///
/// A delete without an id is answered like an invalid one.
#[utoipa::path(
    delete,
    path = "/orders",
    responses(
        (status = 400, description = "Missing order id", body = DeleteResponse),
    ),
    tag = "orders"
)]
pub async fn delete_order_without_id() -> HttpResponse {
    DeleteResult::rejected("Invalid Order Id").into()
}
