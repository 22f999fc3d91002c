//! Measurement unit HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::UnitHandlers;
pub use routes::unit_routes;
