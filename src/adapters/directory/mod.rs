//! Corporate directory adapters.

mod random_user;

pub use random_user::RandomUserDirectory;
