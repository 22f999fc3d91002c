//! RegisterCountHandler - records a physical count for a product in a
//! session.
//!
//! There is deliberately no application-level duplicate pre-check here:
//! the storage constraint on (session, product) is the single guard, and
//! the repository adapter translates its violation into a rule violation.

use std::sync::Arc;

use crate::domain::foundation::{
    CountId, DomainError, ErrorCode, ProductId, SessionId, Timestamp, UnitId, WarehouseId,
};
use crate::domain::inventory::InventoryCount;
use crate::ports::{CountRepository, ProductRepository, SessionRepository};

/// Command to register a count.
#[derive(Debug, Clone)]
pub struct RegisterCountCommand {
    pub session_id: SessionId,
    pub product_id: ProductId,
    /// Quantity as entered, in packaging units.
    pub packaging_quantity: i64,
    /// Unit the quantity was entered in, when the client reports one.
    pub measure_unit_id: Option<UnitId>,
    pub actor_warehouse_ids: Vec<WarehouseId>,
    pub actor_is_admin: bool,
}

/// Handler for count registration.
pub struct RegisterCountHandler {
    sessions: Arc<dyn SessionRepository>,
    products: Arc<dyn ProductRepository>,
    counts: Arc<dyn CountRepository>,
}

impl RegisterCountHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        products: Arc<dyn ProductRepository>,
        counts: Arc<dyn CountRepository>,
    ) -> Self {
        Self {
            sessions,
            products,
            counts,
        }
    }

    pub async fn handle(&self, cmd: RegisterCountCommand) -> Result<InventoryCount, DomainError> {
        if cmd.packaging_quantity < 0 {
            return Err(DomainError::validation(
                "packaging_quantity",
                "must not be negative",
            ));
        }

        let session = self
            .sessions
            .get_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SessionNotFound, "Inventory session not found")
            })?;

        // Non-admins must be assigned to the session's warehouse
        if !cmd.actor_is_admin && !cmd.actor_warehouse_ids.contains(session.warehouse_id()) {
            return Err(DomainError::rule_violated(
                "You are not assigned to the warehouse of this inventory session",
            ));
        }

        let product = self
            .products
            .get_by_id(&cmd.product_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProductNotFound, "Product not found"))?;

        let factor = product.conversion_factor() as i64;
        let count = InventoryCount::registered(
            CountId::new(),
            cmd.session_id,
            cmd.product_id,
            cmd.measure_unit_id,
            cmd.packaging_quantity,
            factor,
            Timestamp::now(),
        );
        self.counts.save(&count).await?;

        tracing::info!(
            session_id = %cmd.session_id,
            product_id = %cmd.product_id,
            packaging_quantity = count.quantity_packages(),
            total_units = count.quantity_units(),
            "inventory count registered"
        );
        Ok(count)
    }
}
