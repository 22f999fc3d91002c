//! Application layer - use case handlers over the domain rule engine.

pub mod handlers;
