use actix_web::{web, HttpResponse};

use crate::application::order_service::OrderService;
use crate::errors::AppError;
use crate::handlers::orders::CustomerResponse;

/// GET /customers
#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "All customers", body = [CustomerResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn list_customers(service: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let customers = web::block(move || service.list_customers())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<CustomerResponse> = customers.into_iter().map(CustomerResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
