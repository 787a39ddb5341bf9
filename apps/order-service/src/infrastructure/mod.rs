//! Infrastructure Layer
//!
//! Adapters for the ports defined in the domain and application layers:
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: in-memory `OrderRepository`
//!
//! - **Driver Adapters (Inbound)**
//!   - `http/`: REST API controllers

pub mod http;
pub mod persistence;
