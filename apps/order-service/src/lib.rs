// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Order Service - Rust Core Library
//!
//! In-memory order management behind a small JSON REST API.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: `Order` aggregate, validation rules, `OrderRepository` port
//! - **Application**: DTOs and the list/get/create/update/delete use cases
//! - **Infrastructure**: in-memory repository and the axum HTTP adapter
//!
//! Cross-cutting: `config` (YAML + env interpolation) and `observability`
//! (tracing subscriber, Prometheus metrics).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - DTOs and use cases.
pub mod application;

/// Infrastructure layer - Adapters for persistence and HTTP.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Service configuration.
pub mod config;

/// Logging and metrics.
pub mod observability;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::dto::{OrderCreationDto, OrderDto};
pub use domain::order::{Order, OrderDetails, OrderError, OrderRepository};
pub use domain::shared::{OrderId, Timestamp};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::InMemoryOrderRepository;
