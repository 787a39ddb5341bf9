//! Delete Order Use Case

use std::sync::Arc;

use crate::domain::order::{OrderError, OrderRepository};
use crate::domain::shared::OrderId;
use crate::observability;

/// Use case for deleting orders.
pub struct DeleteOrderUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> DeleteOrderUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new `DeleteOrderUseCase`.
    pub const fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// Remove the order with `order_id`.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` if no such order exists.
    pub async fn execute(&self, order_id: &OrderId) -> Result<(), OrderError> {
        let removed = self.order_repo.remove(order_id).await?;

        tracing::info!(
            order_id = %removed.id(),
            client = removed.client(),
            "Order deleted"
        );
        observability::record_order_deleted();
        if let Ok(count) = self.order_repo.count().await {
            observability::update_orders_in_store(count);
        }

        Ok(())
    }
}
