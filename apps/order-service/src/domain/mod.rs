//! Domain Layer
//!
//! The innermost layer containing business logic with no infrastructure
//! dependencies:
//!
//! - **Aggregate**: `Order`, whose invariants (non-blank client, positive
//!   total, immutable identity) are enforced on every write
//! - **Value Objects**: `OrderId`, `Timestamp`
//! - **Repository Trait**: persistence abstraction implemented by adapters

pub mod order;
pub mod shared;
