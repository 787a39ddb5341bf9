//! In-memory order repository.
//!
//! Orders live in a `Vec` behind a read-write lock, so list order is
//! insertion order and replacing an order never moves it. The contents are
//! lost on restart.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::order::{Order, OrderError, OrderRepository};
use crate::domain::shared::OrderId;

/// In-memory implementation of `OrderRepository`.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(Vec::new()),
        }
    }

    /// Get the number of orders in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }

    /// Check if an order with `id` is stored.
    #[must_use]
    pub fn contains(&self, id: &OrderId) -> bool {
        self.orders.read().iter().any(|o| o.id() == id)
    }

    /// Copy of the current contents, in store order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.read().clone()
    }

    /// Append an order without the duplicate check (for test setup).
    pub fn add(&self, order: Order) {
        self.orders.write().push(order);
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        Ok(self.orders.read().iter().find(|o| o.id() == id).cloned())
    }

    async fn insert(&self, order: &Order) -> Result<(), OrderError> {
        let mut orders = self.orders.write();
        if orders.iter().any(|o| o.id() == order.id()) {
            return Err(OrderError::already_exists(order.id()));
        }
        orders.push(order.clone());
        Ok(())
    }

    async fn replace(&self, order: &Order) -> Result<(), OrderError> {
        let mut orders = self.orders.write();
        let slot = orders
            .iter_mut()
            .find(|o| o.id() == order.id())
            .ok_or_else(|| OrderError::not_found(order.id()))?;
        *slot = order.clone();
        Ok(())
    }

    async fn remove(&self, id: &OrderId) -> Result<Order, OrderError> {
        let mut orders = self.orders.write();
        let index = orders
            .iter()
            .position(|o| o.id() == id)
            .ok_or_else(|| OrderError::not_found(id))?;
        Ok(orders.remove(index))
    }

    async fn count(&self) -> Result<usize, OrderError> {
        Ok(self.len())
    }

    async fn exists(&self, id: &OrderId) -> Result<bool, OrderError> {
        Ok(self.contains(id))
    }
}
