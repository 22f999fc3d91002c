//! Inventory counting rule engine - sessions, counts, conversion, scoping.

mod access;
mod conversion;
mod count;
mod session;

pub use access::warehouse_accessible;
pub use conversion::total_units;
pub use count::InventoryCount;
pub use session::{
    creation_window_allows, next_count_number, InventorySession, ALLOWED_CREATION_DAYS,
    MAX_SESSIONS_PER_PERIOD, RESTRICT_CREATION_WINDOW_FLAG,
};
