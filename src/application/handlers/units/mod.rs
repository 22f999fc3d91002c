//! Handlers for measurement unit administration.

mod create_unit;
mod list_units;
mod toggle_unit;
mod update_unit;

pub use create_unit::{CreateUnitCommand, CreateUnitHandler};
pub use list_units::ListUnitsHandler;
pub use toggle_unit::{ToggleUnitCommand, ToggleUnitHandler};
pub use update_unit::{UpdateUnitCommand, UpdateUnitHandler};
