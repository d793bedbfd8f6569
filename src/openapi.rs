use utoipa::OpenApi;

use crate::handlers::{customers, order_items, orders};

#[derive(OpenApi)]
#[openapi(
    paths(
        orders::list_orders,
        orders::list_order_views,
        orders::get_order,
        orders::create_order,
        orders::create_order_returning_id,
        orders::update_order,
        orders::delete_order,
        orders::delete_order_without_id,
        order_items::list_order_items,
        customers::list_customers,
    ),
    components(schemas(
        orders::OrderRequest,
        orders::OrderResponse,
        orders::CustomerResponse,
        orders::OrderItemResponse,
        orders::CustomerOrderViewResponse,
        orders::CreateOrderResponse,
        orders::DeleteResponse,
    )),
    tags(
        (name = "orders", description = "Order records"),
        (name = "order-items", description = "Order line items"),
        (name = "customers", description = "Customers"),
    )
)]
pub struct ApiDoc;
