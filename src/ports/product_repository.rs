//! Product repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProductId};
use crate::domain::product::Product;

/// Repository port for product lookups.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by its ID. Returns `None` if not found.
    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// All active products, for selection lists.
    async fn list_active(&self) -> Result<Vec<Product>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn product_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProductRepository) {}
    }
}
