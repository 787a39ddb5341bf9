//! Order bounded context.
//!
//! - [`aggregate`]: `Order` and its validated `OrderDetails`
//! - [`errors`]: `OrderError`
//! - [`repository`]: `OrderRepository` port

pub mod aggregate;
pub mod errors;
pub mod repository;

pub use aggregate::{CLIENT_REQUIRED_MESSAGE, Order, OrderDetails, TOTAL_NOT_POSITIVE_MESSAGE};
pub use errors::OrderError;
pub use repository::OrderRepository;
