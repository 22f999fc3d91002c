//! Command and query handlers for the inventory counting rule engine.

mod add_products;
mod close_session;
mod create_session;
mod get_session;
mod list_counts;
mod list_session_products;
mod list_sessions;
mod register_count;

pub use add_products::{AddProductsCommand, AddProductsHandler};
pub use close_session::{CloseSessionCommand, CloseSessionHandler};
pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use list_counts::{CountView, ListCountsHandler, ListCountsQuery};
pub use list_session_products::{
    ListSessionProductsHandler, ListSessionProductsQuery, SessionProductItem,
};
pub use list_sessions::{ListSessionsHandler, ListSessionsQuery, SessionSummary};
pub use register_count::{RegisterCountCommand, RegisterCountHandler};

/// End-to-end walk through one counting cycle, across handlers.
#[cfg(test)]
mod scenario_tests {
    use std::sync::Arc;

    use super::support::{test_product, MemCountRepo, MemFlags, MemProductRepo, MemSessionRepo};
    use super::*;
    use crate::domain::foundation::{Period, Timestamp, UserId, UserRole, WarehouseId};

    #[tokio::test]
    async fn full_counting_cycle_for_one_warehouse() {
        let warehouse_id = WarehouseId::new();
        let product = test_product(12.0);
        let product_id = *product.id();

        let sessions = Arc::new(MemSessionRepo::new());
        let counts = Arc::new(MemCountRepo::new());
        let products = Arc::new(MemProductRepo::with_products(vec![product]));

        let create = CreateSessionHandler::new(sessions.clone(), Arc::new(MemFlags::new()));
        let register = RegisterCountHandler::new(sessions.clone(), products.clone(), counts.clone());
        let close = CloseSessionHandler::new(sessions.clone());
        let add = AddProductsHandler::new(sessions.clone(), counts.clone(), products.clone());

        // Create the first session of February 2025
        let session = create
            .handle(CreateSessionCommand {
                warehouse_id,
                period: Period::from_year_month(2025, 2).unwrap(),
                created_by: UserId::new(),
                creator_role: UserRole::Admin,
                creator_warehouse_ids: vec![],
                today: Timestamp::now(),
            })
            .await
            .unwrap();
        assert_eq!(session.count_number(), 1);

        // Register 5 packages of a factor-12 product
        let count = register
            .handle(RegisterCountCommand {
                session_id: *session.id(),
                product_id,
                packaging_quantity: 5,
                measure_unit_id: None,
                actor_warehouse_ids: vec![warehouse_id],
                actor_is_admin: false,
            })
            .await
            .unwrap();
        assert_eq!(count.quantity_units(), 60);

        // Close the session
        close
            .handle(CloseSessionCommand {
                session_id: *session.id(),
            })
            .await
            .unwrap();

        // Adding the product again is rejected: the session is closed
        let err = add
            .handle(AddProductsCommand {
                session_id: *session.id(),
                product_ids: vec![product_id],
            })
            .await
            .unwrap_err();
        assert!(err.is_rule_violation());

        // A second registration trips the (session, product) uniqueness guard
        let err = register
            .handle(RegisterCountCommand {
                session_id: *session.id(),
                product_id,
                packaging_quantity: 7,
                measure_unit_id: None,
                actor_warehouse_ids: vec![warehouse_id],
                actor_is_admin: false,
            })
            .await
            .unwrap_err();
        assert!(err.is_rule_violation());

        // The audit trail still holds exactly the one original count
        let saved = counts.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].quantity_packages(), 5);
    }
}
