use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::find_one::{FindOneProductParams, FindOneProductUseCase};
use crate::domain::product::use_cases::remove::{RemoveProductParams, RemoveProductUseCase};

/// Soft delete: the row stays in the store with `available = false`.
pub struct RemoveProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub find_one: Arc<dyn FindOneProductUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Removing product: {}", params.id));

        self.find_one
            .execute(FindOneProductParams { id: params.id })
            .await?;

        let product = self
            .repository
            .update(params.id, &ProductChanges::mark_unavailable())
            .await?;

        self.logger
            .info(&format!("Product marked unavailable: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProductProps, ProductId};
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn create(&self, props: &NewProductProps) -> Result<Product, RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
            async fn find_available(&self, skip: u64, take: u64) -> Result<Vec<Product>, RepositoryError>;
            async fn find_available_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
            async fn update(&self, id: ProductId, changes: &ProductChanges) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub FindOne {}

        #[async_trait]
        impl FindOneProductUseCase for FindOne {
            async fn execute(&self, params: FindOneProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_flip_availability_through_update() {
        let mut find_one = MockFindOne::new();
        find_one.expect_execute().times(1).returning(|params| {
            let now = Utc::now();
            Ok(Product::from_repository(
                params.id,
                "Chair".to_string(),
                85.0,
                true,
                now,
                now,
            ))
        });

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .withf(|id, changes| *id == 9 && *changes == ProductChanges::mark_unavailable())
            .times(1)
            .returning(|id, _| {
                let now = Utc::now();
                Ok(Product::from_repository(
                    id,
                    "Chair".to_string(),
                    85.0,
                    false,
                    now,
                    now,
                ))
            });

        let use_case = RemoveProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            find_one: Arc::new(find_one),
            logger: mock_logger(),
        };

        let removed = use_case
            .execute(RemoveProductParams { id: 9 })
            .await
            .unwrap();

        assert_eq!(removed.id, 9);
        assert!(!removed.available);
    }

    #[tokio::test]
    async fn should_return_not_found_for_already_removed_product() {
        let mut find_one = MockFindOne::new();
        find_one
            .expect_execute()
            .returning(|params| Err(ProductError::not_found(params.id)));

        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update().never();

        let use_case = RemoveProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            find_one: Arc::new(find_one),
            logger: mock_logger(),
        };

        let result = use_case.execute(RemoveProductParams { id: 9 }).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::NotFound { id: 9 }
        ));
    }
}
