//! In-memory `OrderRepository` for unit tests of the facade and handlers.

use std::str::FromStr;
use std::sync::Mutex;

use bigdecimal::BigDecimal;

use crate::domain::errors::DomainError;
use crate::domain::order::{Customer, CustomerOrderView, OrderDetails, OrderInput, OrderItem};
use crate::domain::ports::OrderRepository;

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Unavailable,
    NothingPersisted,
    Internal,
}

struct ItemRecord {
    id: i32,
    name: String,
    price: BigDecimal,
}

#[derive(Default)]
struct State {
    customers: Vec<Customer>,
    items: Vec<ItemRecord>,
    order_items: Vec<OrderItem>,
    orders: Vec<(i32, OrderInput)>,
    next_order_id: i32,
    failure: Option<Failure>,
}

#[derive(Default)]
pub struct InMemoryOrderRepository {
    state: Mutex<State>,
}

impl InMemoryOrderRepository {
    /// Two customers, two items, and one line item per item.
    pub fn seeded() -> Self {
        Self::default()
            .with_customer(1, "Ada")
            .with_customer(2, "Grace")
            .with_item(1, "Keyboard", "49.90")
            .with_item(2, "Monitor", "199.00")
            .with_order_item(10, 1, 2)
            .with_order_item(11, 2, 1)
    }

    pub fn with_customer(self, id: i32, name: &str) -> Self {
        self.state.lock().unwrap().customers.push(Customer {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn with_item(self, id: i32, name: &str, price: &str) -> Self {
        self.state.lock().unwrap().items.push(ItemRecord {
            id,
            name: name.to_string(),
            price: BigDecimal::from_str(price).unwrap(),
        });
        self
    }

    pub fn with_order_item(self, id: i32, item_id: i32, quantity: i32) -> Self {
        self.state.lock().unwrap().order_items.push(OrderItem {
            id,
            item_id,
            quantity,
        });
        self
    }

    pub fn failing(self, failure: Failure) -> Self {
        self.state.lock().unwrap().failure = Some(failure);
        self
    }

    fn check(state: &State) -> Result<(), DomainError> {
        match state.failure {
            None | Some(Failure::NothingPersisted) => Ok(()),
            Some(Failure::Unavailable) => {
                Err(DomainError::Unavailable("pool timed out".to_string()))
            }
            Some(Failure::Internal) => Err(DomainError::Internal("connection reset".to_string())),
        }
    }

    fn check_references(state: &State, input: &OrderInput) -> Result<(), DomainError> {
        let customer_known = state.customers.iter().any(|c| c.id == input.customer_id);
        let order_item_known = state.order_items.iter().any(|oi| oi.id == input.order_item_id);
        if customer_known && order_item_known {
            Ok(())
        } else {
            Err(DomainError::InvalidInput("foreign key violation".to_string()))
        }
    }

    fn details(state: &State, id: i32, input: &OrderInput) -> Option<OrderDetails> {
        let customer = state.customers.iter().find(|c| c.id == input.customer_id)?;
        let order_item = state.order_items.iter().find(|oi| oi.id == input.order_item_id)?;
        Some(OrderDetails {
            id,
            order_date: input.order_date,
            customer: customer.clone(),
            order_item: order_item.clone(),
        })
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn list_orders(&self) -> Result<Vec<OrderDetails>, DomainError> {
        let state = self.state.lock().unwrap();
        Self::check(&state)?;
        Ok(state
            .orders
            .iter()
            .filter_map(|(id, input)| Self::details(&state, *id, input))
            .collect())
    }

    fn list_order_views(&self) -> Result<Vec<CustomerOrderView>, DomainError> {
        let state = self.state.lock().unwrap();
        Self::check(&state)?;
        Ok(state
            .orders
            .iter()
            .filter_map(|(id, input)| {
                let details = Self::details(&state, *id, input)?;
                let item = state.items.iter().find(|i| i.id == details.order_item.item_id)?;
                Some(CustomerOrderView {
                    customer_id: details.customer.id,
                    customer_name: details.customer.name,
                    item_name: item.name.clone(),
                    price: item.price.clone(),
                    quantity: details.order_item.quantity,
                    order_date: details.order_date,
                })
            })
            .collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<OrderDetails>, DomainError> {
        let state = self.state.lock().unwrap();
        Self::check(&state)?;
        Ok(state
            .orders
            .iter()
            .find(|(order_id, _)| *order_id == id)
            .and_then(|(order_id, input)| Self::details(&state, *order_id, input)))
    }

    fn insert(&self, input: &OrderInput) -> Result<i32, DomainError> {
        let mut state = self.state.lock().unwrap();
        Self::check(&state)?;
        if matches!(state.failure, Some(Failure::NothingPersisted)) {
            return Err(DomainError::NothingPersisted);
        }
        Self::check_references(&state, input)?;
        state.next_order_id += 1;
        let id = state.next_order_id;
        state.orders.push((id, input.clone()));
        Ok(id)
    }

    fn update(&self, id: i32, input: &OrderInput) -> Result<bool, DomainError> {
        let mut state = self.state.lock().unwrap();
        Self::check(&state)?;
        if !state.orders.iter().any(|(order_id, _)| *order_id == id) {
            return Ok(false);
        }
        Self::check_references(&state, input)?;
        if let Some((_, existing)) = state.orders.iter_mut().find(|(order_id, _)| *order_id == id) {
            *existing = input.clone();
        }
        Ok(true)
    }

    fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let mut state = self.state.lock().unwrap();
        Self::check(&state)?;
        let before = state.orders.len();
        state.orders.retain(|(order_id, _)| *order_id != id);
        Ok(state.orders.len() < before)
    }

    fn list_order_items(&self) -> Result<Vec<OrderItem>, DomainError> {
        let state = self.state.lock().unwrap();
        Self::check(&state)?;
        Ok(state.order_items.clone())
    }

    fn list_customers(&self) -> Result<Vec<Customer>, DomainError> {
        let state = self.state.lock().unwrap();
        Self::check(&state)?;
        Ok(state.customers.clone())
    }
}
