//! Persistence Adapters
//!
//! Implementations of the `OrderRepository` port.

pub mod in_memory;

pub use in_memory::InMemoryOrderRepository;
