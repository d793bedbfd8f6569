use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{Customer, CustomerOrderView, OrderDetails, OrderInput, OrderItem};
use crate::domain::ports::OrderRepository;
use crate::schema::{customers, items, order_items, orders};

use super::models::{CustomerOrderRow, CustomerRow, OrderFieldsRow, OrderItemRow, OrderRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                DomainError::InvalidInput(info.message().to_string())
            }
            other => DomainError::Internal(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Unavailable(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

type OrderWithAssociations = (OrderRow, CustomerRow, OrderItemRow);

fn into_details((order, customer, order_item): OrderWithAssociations) -> OrderDetails {
    OrderDetails {
        id: order.id,
        order_date: order.order_date,
        customer: customer.into(),
        order_item: order_item.into(),
    }
}

fn load_details(conn: &mut PgConnection, id: i32) -> QueryResult<Option<OrderDetails>> {
    let row = orders::table
        .inner_join(customers::table)
        .inner_join(order_items::table)
        .filter(orders::id.eq(id))
        .select((
            OrderRow::as_select(),
            CustomerRow::as_select(),
            OrderItemRow::as_select(),
        ))
        .first::<OrderWithAssociations>(conn)
        .optional()?;

    Ok(row.map(into_details))
}

impl OrderRepository for DieselOrderRepository {
    fn list_orders(&self) -> Result<Vec<OrderDetails>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .inner_join(customers::table)
            .inner_join(order_items::table)
            .select((
                OrderRow::as_select(),
                CustomerRow::as_select(),
                OrderItemRow::as_select(),
            ))
            .order(orders::id.asc())
            .load::<OrderWithAssociations>(&mut conn)?;

        Ok(rows.into_iter().map(into_details).collect())
    }

    fn list_order_views(&self) -> Result<Vec<CustomerOrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = orders::table
            .inner_join(customers::table)
            .inner_join(order_items::table.inner_join(items::table))
            .select((
                customers::id,
                customers::name,
                items::name,
                items::price,
                order_items::quantity,
                orders::order_date,
            ))
            .order(orders::id.asc())
            .load::<CustomerOrderRow>(&mut conn)?;

        Ok(rows.into_iter().map(CustomerOrderView::from).collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<OrderDetails>, DomainError> {
        let mut conn = self.pool.get()?;
        Ok(load_details(&mut conn, id)?)
    }

    fn insert(&self, input: &OrderInput) -> Result<i32, DomainError> {
        let mut conn = self.pool.get()?;

        let ids: Vec<i32> = diesel::insert_into(orders::table)
            .values(&OrderFieldsRow::from(input))
            .returning(orders::id)
            .get_results(&mut conn)?;

        ids.into_iter().next().ok_or(DomainError::NothingPersisted)
    }

    fn update(&self, id: i32, input: &OrderInput) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let updated = diesel::update(orders::table.find(id))
            .set(&OrderFieldsRow::from(input))
            .returning(orders::id)
            .get_result::<i32>(&mut conn)
            .optional()?;

        Ok(updated.is_some())
    }

    fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;
        let removed = diesel::delete(orders::table.find(id)).execute(&mut conn)?;
        Ok(removed > 0)
    }

    fn list_order_items(&self) -> Result<Vec<OrderItem>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = order_items::table
            .select(OrderItemRow::as_select())
            .order(order_items::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(OrderItem::from).collect())
    }

    fn list_customers(&self) -> Result<Vec<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = customers::table
            .select(CustomerRow::as_select())
            .order(customers::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }
}
