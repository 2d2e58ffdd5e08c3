use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pagination::{PageMeta, Paginated, PaginationConfig};
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::find_all::{FindAllProductsParams, FindAllProductsUseCase};

pub struct FindAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub pagination: PaginationConfig,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindAllProductsUseCase for FindAllProductsUseCaseImpl {
    async fn execute(
        &self,
        params: FindAllProductsParams,
    ) -> Result<Paginated<Product>, ProductError> {
        let request = self.pagination.resolve(params.page, params.limit);
        self.logger.info(&format!(
            "Fetching products page {} (limit {})",
            request.page, request.limit
        ));

        // Total spans every row, soft-deleted ones included; the page itself
        // only holds available products.
        let total = self.repository.count().await?;
        let last_page = request.last_page(total);

        let data = self
            .repository
            .find_available(request.skip(), request.take())
            .await?;

        self.logger.debug(&format!(
            "Found {} products on page {} of {}",
            data.len(),
            request.page,
            last_page
        ));

        Ok(Paginated {
            data,
            meta: PageMeta {
                page: request.page.get(),
                total,
                last_page,
            },
        })
    }
}
