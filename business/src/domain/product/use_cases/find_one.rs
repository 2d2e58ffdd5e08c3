use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductId};

pub struct FindOneProductParams {
    pub id: ProductId,
}

/// Existence-and-availability gate. Update and remove go through it too.
#[async_trait]
pub trait FindOneProductUseCase: Send + Sync {
    async fn execute(&self, params: FindOneProductParams) -> Result<Product, ProductError>;
}
