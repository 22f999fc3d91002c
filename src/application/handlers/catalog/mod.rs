//! Read handlers for the product and warehouse catalogs.

mod list_products;
mod list_warehouses;

pub use list_products::ListProductsHandler;
pub use list_warehouses::ListWarehousesHandler;
