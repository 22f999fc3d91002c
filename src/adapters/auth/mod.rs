//! Auth adapters - token signing and password hashing primitives.

mod argon;
mod jwt;

pub use argon::Argon2PasswordHasher;
pub use jwt::JwtTokenService;
