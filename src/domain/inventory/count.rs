//! InventoryCount entity.
//!
//! One product's recorded (or pending) quantity within a session. The
//! count table is also the sole record of product-session membership:
//! there is no separate association table, a row with zero quantity means
//! "added but not yet counted". Uniqueness per (session, product) is
//! enforced by a storage constraint.

use serde::{Deserialize, Serialize};

use super::conversion;
use crate::domain::foundation::{CountId, ProductId, SessionId, Timestamp, UnitId};

/// A count row: quantity in packaging units plus the derived base-unit total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryCount {
    id: CountId,
    session_id: SessionId,
    product_id: ProductId,
    measure_unit_id: Option<UnitId>,
    quantity_packages: i64,
    quantity_units: i64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl InventoryCount {
    /// A zero-quantity membership row: the product is part of the session
    /// but has not been counted yet.
    pub fn placeholder(
        id: CountId,
        session_id: SessionId,
        product_id: ProductId,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            product_id,
            measure_unit_id: None,
            quantity_packages: 0,
            quantity_units: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// A registered count: stores the entered packaging quantity and the
    /// derived base-unit total (quantity x factor).
    #[allow(clippy::too_many_arguments)]
    pub fn registered(
        id: CountId,
        session_id: SessionId,
        product_id: ProductId,
        measure_unit_id: Option<UnitId>,
        quantity_packages: i64,
        factor: i64,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            product_id,
            measure_unit_id,
            quantity_packages,
            quantity_units: conversion::total_units(quantity_packages, factor),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a count from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CountId,
        session_id: SessionId,
        product_id: ProductId,
        measure_unit_id: Option<UnitId>,
        quantity_packages: i64,
        quantity_units: i64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            product_id,
            measure_unit_id,
            quantity_packages,
            quantity_units,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &CountId {
        &self.id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn measure_unit_id(&self) -> Option<&UnitId> {
        self.measure_unit_id.as_ref()
    }

    pub fn quantity_packages(&self) -> i64 {
        self.quantity_packages
    }

    pub fn quantity_units(&self) -> i64 {
        self.quantity_units
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}
