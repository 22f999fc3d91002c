//! ListProductsHandler - active products for selection lists.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::product::Product;
use crate::ports::ProductRepository;

pub struct ListProductsHandler {
    products: Arc<dyn ProductRepository>,
}

impl ListProductsHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn handle(&self) -> Result<Vec<Product>, DomainError> {
        self.products.list_active().await
    }
}
