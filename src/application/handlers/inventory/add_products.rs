//! AddProductsHandler - attaches products to a session as zero-quantity
//! count rows.
//!
//! Membership and counting share one table: inserting a count row with
//! zero quantities is what "the product is part of this session" means.
//! The operation is idempotent per product - an existing (session,
//! product) row is skipped silently.

use std::sync::Arc;

use crate::domain::foundation::{CountId, DomainError, ErrorCode, ProductId, SessionId, Timestamp};
use crate::domain::inventory::InventoryCount;
use crate::ports::{CountRepository, ProductRepository, SessionRepository};

/// Command to add products to an open session.
#[derive(Debug, Clone)]
pub struct AddProductsCommand {
    pub session_id: SessionId,
    pub product_ids: Vec<ProductId>,
}

/// Handler for bulk product attachment.
pub struct AddProductsHandler {
    sessions: Arc<dyn SessionRepository>,
    counts: Arc<dyn CountRepository>,
    products: Arc<dyn ProductRepository>,
}

impl AddProductsHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        counts: Arc<dyn CountRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            sessions,
            counts,
            products,
        }
    }

    /// Returns the newly inserted counts (not the skipped ones).
    ///
    /// Products are processed independently in order. An unknown product
    /// aborts the remaining processing; callers should pre-validate
    /// product existence to avoid partial side effects.
    pub async fn handle(&self, cmd: AddProductsCommand) -> Result<Vec<InventoryCount>, DomainError> {
        let session = self
            .sessions
            .get_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SessionNotFound, "Inventory session not found")
            })?;
        session.ensure_open()?;

        let now = Timestamp::now();
        let mut added = Vec::new();
        for product_id in &cmd.product_ids {
            if self
                .counts
                .exists_by_session_and_product(&cmd.session_id, product_id)
                .await?
            {
                continue;
            }
            if self.products.get_by_id(product_id).await?.is_none() {
                return Err(DomainError::new(
                    ErrorCode::ProductNotFound,
                    format!("Product not found: {}", product_id),
                ));
            }
            let count = InventoryCount::placeholder(CountId::new(), cmd.session_id, *product_id, now);
            self.counts.save(&count).await?;
            added.push(count);
        }

        tracing::info!(
            session_id = %cmd.session_id,
            requested = cmd.product_ids.len(),
            added = added.len(),
            "products added to inventory session"
        );
        Ok(added)
    }
}
