//! Catalog HTTP adapter - product and warehouse reads.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CatalogHandlers;
pub use routes::{product_routes, warehouse_routes};
