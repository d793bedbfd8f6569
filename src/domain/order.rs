use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: i32,
    pub item_id: i32,
    pub quantity: i32,
}

/// An order together with the customer and line item it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    pub id: i32,
    pub order_date: DateTime<Utc>,
    pub customer: Customer,
    pub order_item: OrderItem,
}

/// One row of the order/customer/item reporting join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerOrderView {
    pub customer_id: i32,
    pub customer_name: String,
    pub item_name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub order_date: DateTime<Utc>,
}

/// The writable fields of an order, shared by insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderInput {
    pub order_date: DateTime<Utc>,
    pub customer_id: i32,
    pub order_item_id: i32,
}

impl OrderInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.customer_id <= 0 {
            return Err(DomainError::InvalidInput(format!(
                "customer_id must be positive, got {}",
                self.customer_id
            )));
        }
        if self.order_item_id <= 0 {
            return Err(DomainError::InvalidInput(format!(
                "order_item_id must be positive, got {}",
                self.order_item_id
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatus {
    Ok,
    BadRequest,
    InternalServerError,
}

impl DeleteStatus {
    pub fn code(self) -> u16 {
        match self {
            DeleteStatus::Ok => 200,
            DeleteStatus::BadRequest => 400,
            DeleteStatus::InternalServerError => 500,
        }
    }
}

/// Outcome of a delete: a `{success, message}` body plus a status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub status: DeleteStatus,
    pub success: bool,
    pub message: String,
}

impl DeleteResult {
    pub fn deleted() -> Self {
        Self {
            status: DeleteStatus::Ok,
            success: true,
            message: "Order Deleted successfully".to_string(),
        }
    }

    pub fn rejected(message: &str) -> Self {
        Self {
            status: DeleteStatus::BadRequest,
            success: false,
            message: message.to_string(),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            status: DeleteStatus::InternalServerError,
            success: false,
            message: message.to_string(),
        }
    }
}
