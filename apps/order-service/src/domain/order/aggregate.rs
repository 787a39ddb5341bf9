//! Order aggregate.
//!
//! An order is an identity plus a set of details (client, date, total). The
//! identity is assigned once at creation; the details are only ever replaced
//! as a whole, and only with details that pass validation.

use rust_decimal::Decimal;

use super::errors::OrderError;
use crate::domain::shared::{OrderId, Timestamp};

/// Message returned when the client name is missing.
pub const CLIENT_REQUIRED_MESSAGE: &str = "Please provide a client name";

/// Message returned when the total is zero or negative.
pub const TOTAL_NOT_POSITIVE_MESSAGE: &str = "The total must be greater than 0";

/// The mutable part of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    /// Client name.
    pub client: String,
    /// Order date.
    pub date: Timestamp,
    /// Order total.
    pub total: Decimal,
}

impl OrderDetails {
    /// Create order details.
    #[must_use]
    pub fn new(client: impl Into<String>, date: Timestamp, total: Decimal) -> Self {
        Self {
            client: client.into(),
            date,
            total,
        }
    }

    /// Check the details against the order rules.
    ///
    /// The client name must contain a non-whitespace character and the total
    /// must be strictly positive. The client is checked first.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.client.trim().is_empty() {
            return Err(OrderError::validation("client", CLIENT_REQUIRED_MESSAGE));
        }

        if self.total <= Decimal::ZERO {
            return Err(OrderError::validation("total", TOTAL_NOT_POSITIVE_MESSAGE));
        }

        Ok(())
    }
}

/// An order record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    details: OrderDetails,
}

impl Order {
    /// Create a new order with a freshly generated ID.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Validation` if the details are invalid.
    pub fn create(details: OrderDetails) -> Result<Self, OrderError> {
        Self::with_id(OrderId::generate(), details)
    }

    /// Build an order with a known ID (rehydration and test setup).
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Validation` if the details are invalid.
    pub fn with_id(id: OrderId, details: OrderDetails) -> Result<Self, OrderError> {
        details.validate()?;
        Ok(Self { id, details })
    }

    /// Replace every field except the identity.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Validation` and leaves the order untouched if the
    /// new details are invalid.
    pub fn replace_details(&mut self, details: OrderDetails) -> Result<(), OrderError> {
        details.validate()?;
        self.details = details;
        Ok(())
    }

    /// Order ID.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Client name.
    #[must_use]
    pub fn client(&self) -> &str {
        &self.details.client
    }

    /// Order date.
    #[must_use]
    pub const fn date(&self) -> Timestamp {
        self.details.date
    }

    /// Order total.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.details.total
    }
}
