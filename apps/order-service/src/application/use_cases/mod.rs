//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod create_order;
mod delete_order;
mod get_order;
mod list_orders;
mod update_order;

pub use create_order::CreateOrderUseCase;
pub use delete_order::DeleteOrderUseCase;
pub use get_order::GetOrderUseCase;
pub use list_orders::ListOrdersUseCase;
pub use update_order::UpdateOrderUseCase;
