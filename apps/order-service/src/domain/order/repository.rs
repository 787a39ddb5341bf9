//! Order Repository Trait
//!
//! Defines the persistence abstraction for orders.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::Order;
use super::errors::OrderError;
use crate::domain::shared::OrderId;

/// Repository trait for Order persistence.
///
/// Orders are kept in insertion order. Every write is a full-record
/// operation; there are no field-level updates.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// List every order, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list_all(&self) -> Result<Vec<Order>, OrderError>;

    /// Find an order by its ID.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;

    /// Insert a new order.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::AlreadyExists` if the ID is taken.
    async fn insert(&self, order: &Order) -> Result<(), OrderError>;

    /// Replace a stored order, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` if no order has the same ID.
    async fn replace(&self, order: &Order) -> Result<(), OrderError>;

    /// Remove an order and return it.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` if no order has the ID.
    async fn remove(&self, id: &OrderId) -> Result<Order, OrderError>;

    /// Number of stored orders.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn count(&self) -> Result<usize, OrderError> {
        Ok(self.list_all().await?.len())
    }

    /// Check if an order exists.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn exists(&self, id: &OrderId) -> Result<bool, OrderError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
