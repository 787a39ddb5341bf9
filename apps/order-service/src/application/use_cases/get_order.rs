//! Get Order Use Case

use std::sync::Arc;

use crate::application::dto::OrderDto;
use crate::domain::order::{OrderError, OrderRepository};
use crate::domain::shared::OrderId;

/// Use case for fetching a single order.
pub struct GetOrderUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> GetOrderUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new `GetOrderUseCase`.
    pub const fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// Fetch the order with `order_id`.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` if no such order exists.
    pub async fn execute(&self, order_id: &OrderId) -> Result<OrderDto, OrderError> {
        self.order_repo
            .find_by_id(order_id)
            .await?
            .map(|order| OrderDto::from_order(&order))
            .ok_or_else(|| OrderError::not_found(order_id))
    }
}
