//! Update Order Use Case

use std::sync::Arc;

use crate::application::dto::{OrderCreationDto, OrderDto};
use crate::domain::order::{OrderError, OrderRepository};
use crate::domain::shared::OrderId;
use crate::observability;

/// Use case for replacing an order's details.
pub struct UpdateOrderUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> UpdateOrderUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new `UpdateOrderUseCase`.
    pub const fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// Replace every field of `order_id` except its identity.
    ///
    /// Validation runs before the lookup, so an invalid body is rejected even
    /// for an unknown ID.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Validation` for invalid details, or
    /// `OrderError::NotFound` if the order does not exist.
    pub async fn execute(
        &self,
        order_id: &OrderId,
        request: OrderCreationDto,
    ) -> Result<OrderDto, OrderError> {
        // 1. Validate
        let details = request.into_details();
        details.validate().inspect_err(|e| {
            if let OrderError::Validation { field, message } = e {
                tracing::debug!(order_id = %order_id, field, %message, "Rejected order update");
                observability::record_validation_failure(field);
            }
        })?;

        // 2. Load
        let mut order = self
            .order_repo
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| OrderError::not_found(order_id))?;

        // 3. Replace in place
        order.replace_details(details)?;
        self.order_repo.replace(&order).await?;

        tracing::info!(
            order_id = %order.id(),
            client = order.client(),
            total = %order.total(),
            "Order updated"
        );
        observability::record_order_updated();

        Ok(OrderDto::from_order(&order))
    }
}
