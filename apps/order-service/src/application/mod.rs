//! Application Layer
//!
//! - `dto`: request/response shapes at the API boundary
//! - `use_cases`: list, get, create, update and delete, each generic over the
//!   `OrderRepository` port

pub mod dto;
pub mod use_cases;
