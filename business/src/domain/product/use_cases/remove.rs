use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductId};

pub struct RemoveProductParams {
    pub id: ProductId,
}

#[async_trait]
pub trait RemoveProductUseCase: Send + Sync {
    async fn execute(&self, params: RemoveProductParams) -> Result<Product, ProductError>;
}
