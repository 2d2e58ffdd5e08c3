use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProductProps, Product, ProductChanges, ProductId};

/// Data access port for products.
///
/// Implementations own id assignment, the `available` default and the
/// ordering of listed rows (ascending id).
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, props: &NewProductProps) -> Result<Product, RepositoryError>;
    /// Counts every stored product, available or not.
    async fn count(&self) -> Result<u64, RepositoryError>;
    async fn find_available(&self, skip: u64, take: u64) -> Result<Vec<Product>, RepositoryError>;
    async fn find_available_by_id(&self, id: ProductId)
    -> Result<Option<Product>, RepositoryError>;
    async fn update(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError>;
}
