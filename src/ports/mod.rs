//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the rule engine and the outside world. Adapters implement these ports.
//!
//! ## Repository ports
//!
//! - `SessionRepository` / `CountRepository` - the counting rule engine's
//!   write and read surface
//! - `ProductRepository` / `WarehouseRepository` / `UnitRepository` /
//!   `UserRepository` - catalog and identity lookups
//! - `FeatureFlagRepository` - keyed on/off toggles gating rule behavior
//!
//! ## Auth and integration ports
//!
//! - `PasswordHasher` - credential hashing primitive
//! - `TokenService` - bearer token issue/verify
//! - `UserDirectory` - corporate directory HTTP collaborator

mod count_repository;
mod feature_flag_repository;
mod password_hasher;
mod product_repository;
mod session_repository;
mod token_service;
mod unit_repository;
mod user_directory;
mod user_repository;
mod warehouse_repository;

pub use count_repository::CountRepository;
pub use feature_flag_repository::FeatureFlagRepository;
pub use password_hasher::PasswordHasher;
pub use product_repository::ProductRepository;
pub use session_repository::{SessionFilter, SessionRepository, SessionStatusFilter};
pub use token_service::TokenService;
pub use unit_repository::UnitRepository;
pub use user_directory::{DirectoryMember, UserDirectory};
pub use user_repository::UserRepository;
pub use warehouse_repository::WarehouseRepository;
