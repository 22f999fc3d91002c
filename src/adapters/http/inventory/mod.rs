//! Inventory session HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::InventoryHandlers;
pub use routes::inventory_routes;
