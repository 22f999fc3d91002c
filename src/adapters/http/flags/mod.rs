//! Feature flag HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::FlagHandlers;
pub use routes::flag_routes;
