//! Stocktake - Warehouse inventory-counting administration backend.
//!
//! Manages warehouses, products, measurement units, users, and periodic
//! inventory count sessions in which staff record physical stock counts
//! per product. The counting rule engine (session lifecycle, count
//! registration, unit conversion, access scoping) lives in `domain` and
//! `application`; transport and persistence are adapters behind ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
