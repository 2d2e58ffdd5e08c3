use std::num::NonZeroU32;

use async_trait::async_trait;

use crate::domain::pagination::Paginated;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Missing values fall back to the configured pagination defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindAllProductsParams {
    pub page: Option<NonZeroU32>,
    pub limit: Option<NonZeroU32>,
}

#[async_trait]
pub trait FindAllProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: FindAllProductsParams,
    ) -> Result<Paginated<Product>, ProductError>;
}
