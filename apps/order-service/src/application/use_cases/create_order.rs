//! Create Order Use Case

use std::sync::Arc;

use crate::application::dto::{OrderCreationDto, OrderDto};
use crate::domain::order::{Order, OrderError, OrderRepository};
use crate::observability;

/// Use case for creating orders.
pub struct CreateOrderUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> CreateOrderUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new `CreateOrderUseCase`.
    pub const fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// Validate the request, assign a fresh ID and store the order.
    ///
    /// The store is not touched when validation fails.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Validation` for a blank client or a non-positive
    /// total.
    pub async fn execute(&self, request: OrderCreationDto) -> Result<OrderDto, OrderError> {
        // 1. Validate and build the aggregate
        let order = Order::create(request.into_details()).inspect_err(|e| {
            if let OrderError::Validation { field, message } = e {
                tracing::debug!(field, %message, "Rejected order creation");
                observability::record_validation_failure(field);
            }
        })?;

        // 2. Persist
        self.order_repo.insert(&order).await?;

        tracing::info!(
            order_id = %order.id(),
            client = order.client(),
            total = %order.total(),
            "Order created"
        );
        observability::record_order_created();
        if let Ok(count) = self.order_repo.count().await {
            observability::update_orders_in_store(count);
        }

        Ok(OrderDto::from_order(&order))
    }
}
