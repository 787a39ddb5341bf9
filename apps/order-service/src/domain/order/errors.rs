//! Order errors.

use thiserror::Error;

/// Errors that can occur when managing orders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Submitted order fields failed validation.
    #[error("{message}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable message.
        message: String,
    },

    /// No order with the given ID exists.
    #[error("Order {order_id} not found")]
    NotFound {
        /// The order ID that was looked up.
        order_id: String,
    },

    /// An order with the given ID is already stored.
    #[error("Order {order_id} already exists")]
    AlreadyExists {
        /// The duplicate order ID.
        order_id: String,
    },
}

impl OrderError {
    /// Create a validation error for a field.
    #[must_use]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a not-found error.
    #[must_use]
    pub fn not_found(order_id: impl ToString) -> Self {
        Self::NotFound {
            order_id: order_id.to_string(),
        }
    }

    /// Create an already-exists error.
    #[must_use]
    pub fn already_exists(order_id: impl ToString) -> Self {
        Self::AlreadyExists {
            order_id: order_id.to_string(),
        }
    }

    /// Check if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a not-found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_displays_message_only() {
        let err = OrderError::validation("client", "Please provide a client name");
        assert_eq!(err.to_string(), "Please provide a client name");
        assert!(err.is_validation());
    }

    #[test]
    fn not_found_display() {
        let err = OrderError::not_found("ord-1");
        assert_eq!(err.to_string(), "Order ord-1 not found");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn already_exists_display() {
        let err = OrderError::already_exists("ord-1");
        assert_eq!(err.to_string(), "Order ord-1 already exists");
    }
}
