//! List Orders Use Case

use std::sync::Arc;

use crate::application::dto::OrderDto;
use crate::domain::order::{OrderError, OrderRepository};

/// Use case returning a snapshot of every order.
pub struct ListOrdersUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> ListOrdersUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new `ListOrdersUseCase`.
    pub const fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// List all orders in store order.
    pub async fn execute(&self) -> Result<Vec<OrderDto>, OrderError> {
        let orders = self.order_repo.list_all().await?;
        Ok(orders.iter().map(OrderDto::from_order).collect())
    }
}
