use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::order::{Customer, CustomerOrderView, OrderInput, OrderItem};
use crate::schema::{customers, items, order_items, orders};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow {
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = items)]
pub struct NewItemRow {
    pub name: String,
    pub price: BigDecimal,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: i32,
    pub item_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow {
    pub item_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
    pub order_date: DateTime<Utc>,
    pub customer_id: i32,
    pub order_item_id: i32,
}

/// Writable order columns; used both for inserts and as the update changeset.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = orders)]
pub struct OrderFieldsRow {
    pub order_date: DateTime<Utc>,
    pub customer_id: i32,
    pub order_item_id: i32,
}

impl From<&OrderInput> for OrderFieldsRow {
    fn from(input: &OrderInput) -> Self {
        Self {
            order_date: input.order_date,
            customer_id: input.customer_id,
            order_item_id: input.order_item_id,
        }
    }
}

/// Columns of the reporting join, in select order.
#[derive(Debug, Queryable)]
pub struct CustomerOrderRow {
    pub customer_id: i32,
    pub customer_name: String,
    pub item_name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub order_date: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name,
        }
    }
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        OrderItem {
            id: row.id,
            item_id: row.item_id,
            quantity: row.quantity,
        }
    }
}

impl From<CustomerOrderRow> for CustomerOrderView {
    fn from(row: CustomerOrderRow) -> Self {
        CustomerOrderView {
            customer_id: row.customer_id,
            customer_name: row.customer_name,
            item_name: row.item_name,
            price: row.price,
            quantity: row.quantity,
            order_date: row.order_date,
        }
    }
}
