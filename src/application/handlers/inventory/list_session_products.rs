//! ListSessionProductsHandler - the products attached to a session,
//! derived from its count rows.
//!
//! Membership lives in the count table, so "products in session" is just
//! the set of products with a count row, regardless of quantity.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ProductId, SessionId};
use crate::ports::{CountRepository, ProductRepository, SessionRepository};

/// Query for a session's product list.
#[derive(Debug, Clone)]
pub struct ListSessionProductsQuery {
    pub session_id: SessionId,
}

/// One product attached to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProductItem {
    pub product_id: ProductId,
    pub code: String,
    pub description: String,
}

/// Handler mapping count rows to product summaries.
pub struct ListSessionProductsHandler {
    sessions: Arc<dyn SessionRepository>,
    counts: Arc<dyn CountRepository>,
    products: Arc<dyn ProductRepository>,
}

impl ListSessionProductsHandler {
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

    pub async fn handle(
        &self,
        query: ListSessionProductsQuery,
    ) -> Result<Vec<SessionProductItem>, DomainError> {
        if self.sessions.get_by_id(&query.session_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                "Inventory session not found",
            ));
        }

        let counts = self.counts.list_by_session(&query.session_id).await?;
        let mut items = Vec::with_capacity(counts.len());
        for count in counts {
            // a dangling product reference degrades to empty fields
            let product = self.products.get_by_id(count.product_id()).await?;
            items.push(SessionProductItem {
                product_id: *count.product_id(),
                code: product.as_ref().map(|p| p.code().to_string()).unwrap_or_default(),
                description: product
                    .as_ref()
                    .map(|p| p.description().to_string())
                    .unwrap_or_default(),
            });
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::inventory::support::{
        test_product, MemCountRepo, MemProductRepo, MemSessionRepo,
    };
    use crate::domain::foundation::{CountId, Period, Timestamp, UserId, WarehouseId};
    use crate::domain::inventory::{InventoryCount, InventorySession};
    use crate::ports::CountRepository as _;

    fn session() -> InventorySession {
        InventorySession::new(
            SessionId::new(),
            WarehouseId::new(),
            Period::from_year_month(2025, 2).unwrap(),
            1,
            UserId::new(),
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn maps_counts_to_product_summaries() {
        let session = session();
        let session_id = *session.id();
        let product = test_product(12.0);

        let counts = MemCountRepo::new();
        counts
            .save(&InventoryCount::placeholder(
                CountId::new(),
                session_id,
                *product.id(),
                Timestamp::now(),
            ))
            .await
            .unwrap();

        let handler = ListSessionProductsHandler::new(
            Arc::new(MemSessionRepo::with_sessions(vec![session])),
            Arc::new(counts),
            Arc::new(MemProductRepo::with_products(vec![product.clone()])),
        );

        let items = handler
            .handle(ListSessionProductsQuery { session_id })
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].code, product.code());
        assert_eq!(items[0].description, product.description());
    }

    #[tokio::test]
    async fn dangling_product_degrades_to_empty_fields() {
        let session = session();
        let session_id = *session.id();
        let orphan_product_id = ProductId::new();

        let counts = MemCountRepo::new();
        counts
            .save(&InventoryCount::placeholder(
                CountId::new(),
                session_id,
                orphan_product_id,
                Timestamp::now(),
            ))
            .await
            .unwrap();

        let handler = ListSessionProductsHandler::new(
            Arc::new(MemSessionRepo::with_sessions(vec![session])),
            Arc::new(counts),
            Arc::new(MemProductRepo::with_products(vec![])),
        );

        let items = handler
            .handle(ListSessionProductsQuery { session_id })
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, orphan_product_id);
        assert_eq!(items[0].code, "");
        assert_eq!(items[0].description, "");
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let handler = ListSessionProductsHandler::new(
            Arc::new(MemSessionRepo::new()),
            Arc::new(MemCountRepo::new()),
            Arc::new(MemProductRepo::with_products(vec![])),
        );

        let err = handler
            .handle(ListSessionProductsQuery {
                session_id: SessionId::new(),
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
