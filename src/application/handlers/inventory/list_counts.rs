//! ListCountsHandler - counts for a session, enriched for display.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, UnitId};
use crate::domain::inventory::InventoryCount;
use crate::domain::product::Product;
use crate::domain::unit::MeasurementUnit;
use crate::ports::{CountRepository, ProductRepository, SessionRepository, UnitRepository};

/// Query for a session's counts.
#[derive(Debug, Clone)]
pub struct ListCountsQuery {
    pub session_id: SessionId,
}

/// A count with its product and entry unit resolved for the response.
#[derive(Debug, Clone)]
pub struct CountView {
    pub count: InventoryCount,
    pub product: Option<Product>,
    pub measure_unit: Option<MeasurementUnit>,
}

/// Handler listing counts in stable audit order (creation time ascending).
pub struct ListCountsHandler {
    sessions: Arc<dyn SessionRepository>,
    counts: Arc<dyn CountRepository>,
    products: Arc<dyn ProductRepository>,
    units: Arc<dyn UnitRepository>,
}

impl ListCountsHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        counts: Arc<dyn CountRepository>,
        products: Arc<dyn ProductRepository>,
        units: Arc<dyn UnitRepository>,
    ) -> Self {
        Self {
            sessions,
            counts,
            products,
            units,
        }
    }

    pub async fn handle(&self, query: ListCountsQuery) -> Result<Vec<CountView>, DomainError> {
        if self.sessions.get_by_id(&query.session_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                "Inventory session not found",
            ));
        }

        let counts = self.counts.list_by_session(&query.session_id).await?;

        let unit_ids: Vec<UnitId> = {
            let mut ids: Vec<UnitId> = counts.iter().filter_map(|c| c.measure_unit_id().copied()).collect();
            ids.sort();
            ids.dedup();
            ids
        };
        let units: HashMap<UnitId, MeasurementUnit> = self
            .units
            .get_by_ids(&unit_ids)
            .await?
            .into_iter()
            .map(|u| (*u.id(), u))
            .collect();

        let mut views = Vec::with_capacity(counts.len());
        for count in counts {
            let product = self.products.get_by_id(count.product_id()).await?;
            let measure_unit = count.measure_unit_id().and_then(|id| units.get(id)).cloned();
            views.push(CountView {
                count,
                product,
                measure_unit,
            });
        }
        Ok(views)
    }
}
