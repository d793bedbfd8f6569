use super::errors::DomainError;
use super::order::{Customer, CustomerOrderView, OrderDetails, OrderInput, OrderItem};

/// Store access used by the order facade. Each call is one statement against
/// the store.
pub trait OrderRepository: Send + Sync + 'static {
    fn list_orders(&self) -> Result<Vec<OrderDetails>, DomainError>;
    fn list_order_views(&self) -> Result<Vec<CustomerOrderView>, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<OrderDetails>, DomainError>;
    /// Returns the generated id, or `NothingPersisted` when no row was written.
    fn insert(&self, input: &OrderInput) -> Result<i32, DomainError>;
    /// Returns `false` when no order has the given id.
    fn update(&self, id: i32, input: &OrderInput) -> Result<bool, DomainError>;
    /// Returns `false` when no order has the given id.
    fn delete(&self, id: i32) -> Result<bool, DomainError>;
    fn list_order_items(&self) -> Result<Vec<OrderItem>, DomainError>;
    fn list_customers(&self) -> Result<Vec<Customer>, DomainError>;
}
