//! Shared Domain Types
//!
//! Value objects shared across the domain.

pub mod identifiers;
pub mod timestamp;

pub use identifiers::OrderId;
pub use timestamp::{Timestamp, TimestampParseError};
