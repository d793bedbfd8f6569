use actix_web::{web, HttpResponse};

use crate::application::order_service::OrderService;
use crate::errors::AppError;
use crate::handlers::orders::OrderItemResponse;

/// GET /order-items
#[utoipa::path(
    get,
    path = "/order-items",
    responses(
        (status = 200, description = "All order line items", body = [OrderItemResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "order-items"
)]
pub async fn list_order_items(service: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let items = web::block(move || service.list_order_items())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderItemResponse> = items.into_iter().map(OrderItemResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
