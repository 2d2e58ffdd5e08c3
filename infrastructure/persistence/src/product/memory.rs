use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProductProps, Product, ProductChanges, ProductId};
use business::domain::product::repository::ProductRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<ProductId, Product>,
    last_id: ProductId,
}

/// Process-local product store, ordered by id.
///
/// Ids come from a sequence that is never rewound, so they are not reused.
#[derive(Default)]
pub struct InMemoryProductRepository {
    table: RwLock<Table>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches a product regardless of its availability flag.
    pub async fn find_any(&self, id: ProductId) -> Option<Product> {
        self.table.read().await.rows.get(&id).cloned()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, props: &NewProductProps) -> Result<Product, RepositoryError> {
        let mut table = self.table.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or(RepositoryError::Persistence)?;

        let now = Utc::now();
        let product = Product::from_repository(id, props.name.clone(), props.price, true, now, now);

        table.last_id = id;
        table.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.table.read().await.rows.len() as u64)
    }

    async fn find_available(&self, skip: u64, take: u64) -> Result<Vec<Product>, RepositoryError> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let take = usize::try_from(take).unwrap_or(usize::MAX);

        Ok(self
            .table
            .read()
            .await
            .rows
            .values()
            .filter(|product| product.available)
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn find_available_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .get(&id)
            .filter(|product| product.available)
            .cloned())
    }

    async fn update(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        let mut table = self.table.write().await;
        let product = table.rows.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        product.apply(changes, Utc::now());
        Ok(product.clone())
    }
}
