//! HTTP middleware.

mod auth;

pub use auth::{auth_middleware, ensure_roles, AuthRejection, AuthState, RequireAuth};
