//! ListWarehousesHandler - active warehouses for selection lists.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::warehouse::Warehouse;
use crate::ports::WarehouseRepository;

pub struct ListWarehousesHandler {
    warehouses: Arc<dyn WarehouseRepository>,
}

impl ListWarehousesHandler {
    pub fn new(warehouses: Arc<dyn WarehouseRepository>) -> Self {
        Self { warehouses }
    }

    pub async fn handle(&self) -> Result<Vec<Warehouse>, DomainError> {
        self.warehouses.list_active().await
    }
}
