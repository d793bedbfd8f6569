use crate::domain::errors::DomainError;
use crate::domain::order::{
    Customer, CustomerOrderView, DeleteResult, OrderDetails, OrderInput, OrderItem,
};
use crate::domain::ports::OrderRepository;

/// Facade over the order store. Read and write operations return an explicit
/// `DomainError` on failure; delete answers with a status-coded `DeleteResult`.
pub struct OrderService {
    repo: Box<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: impl OrderRepository) -> Self {
        Self {
            repo: Box::new(repo),
        }
    }

    pub fn list_orders(&self) -> Result<Vec<OrderDetails>, DomainError> {
        self.repo.list_orders().inspect_err(|e| log::error!("listing orders failed: {e}"))
    }

    pub fn list_order_views(&self) -> Result<Vec<CustomerOrderView>, DomainError> {
        self.repo
            .list_order_views()
            .inspect_err(|e| log::error!("listing order view failed: {e}"))
    }

    pub fn get_order(&self, id: i32) -> Result<OrderDetails, DomainError> {
        self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)
    }

    /// Persist a new order and return it reloaded with its associations.
    pub fn create_order(&self, input: OrderInput) -> Result<OrderDetails, DomainError> {
        let id = self.create_order_returning_id(input)?;
        self.repo.find_by_id(id)?.ok_or_else(|| {
            DomainError::Internal(format!("order {id} was inserted but could not be reloaded"))
        })
    }

    pub fn create_order_returning_id(&self, input: OrderInput) -> Result<i32, DomainError> {
        input.validate()?;
        let id = self
            .repo
            .insert(&input)
            .inspect_err(|e| log::warn!("inserting order failed: {e}"))?;
        log::info!("created order {id}");
        Ok(id)
    }

    /// Overwrite the date, customer and order item of an existing order.
    pub fn update_order(&self, id: i32, input: OrderInput) -> Result<OrderDetails, DomainError> {
        input.validate()?;
        if !self.repo.update(id, &input)? {
            return Err(DomainError::NotFound);
        }
        self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)
    }

    pub fn delete_order(&self, id: i32) -> DeleteResult {
        if id <= 0 {
            return DeleteResult::rejected("Invalid Order Id");
        }

        match self.repo.delete(id) {
            Ok(true) => {
                log::info!("deleted order {id}");
                DeleteResult::deleted()
            }
            Ok(false) => DeleteResult::rejected("Order not found"),
            Err(DomainError::Unavailable(cause)) => {
                log::error!("deleting order {id}: store unavailable: {cause}");
                DeleteResult::failed("Database connection is not available")
            }
            Err(e) => {
                log::error!("deleting order {id} failed: {e}");
                DeleteResult::failed("Failed to delete order")
            }
        }
    }

    pub fn list_order_items(&self) -> Result<Vec<OrderItem>, DomainError> {
        self.repo
            .list_order_items()
            .inspect_err(|e| log::error!("listing order items failed: {e}"))
    }

    pub fn list_customers(&self) -> Result<Vec<Customer>, DomainError> {
        self.repo
            .list_customers()
            .inspect_err(|e| log::error!("listing customers failed: {e}"))
    }
}
