use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::find_one::{FindOneProductParams, FindOneProductUseCase};

pub struct FindOneProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindOneProductUseCase for FindOneProductUseCaseImpl {
    async fn execute(&self, params: FindOneProductParams) -> Result<Product, ProductError> {
        self.logger
            .debug(&format!("Fetching product by id: {}", params.id));

        match self.repository.find_available_by_id(params.id).await? {
            Some(product) => Ok(product),
            None => {
                self.logger
                    .warn(&format!("Product {} not found or unavailable", params.id));
                Err(ProductError::not_found(params.id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProductProps, ProductChanges, ProductId};
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;

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
    async fn should_return_available_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_available_by_id()
            .with(eq(3))
            .returning(|id| {
                let now = Utc::now();
                Ok(Some(Product::from_repository(
                    id,
                    "Headphones".to_string(),
                    79.0,
                    true,
                    now,
                    now,
                )))
            });

        let use_case = FindOneProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(FindOneProductParams { id: 3 })
            .await
            .unwrap();

        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Headphones");
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing_or_unavailable() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_available_by_id()
            .returning(|_| Ok(None));

        let use_case = FindOneProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(FindOneProductParams { id: 404 })
            .await
            .unwrap_err();

        assert!(matches!(error, ProductError::NotFound { id: 404 }));
        assert!(error.to_string().contains("#404"));
    }

    #[tokio::test]
    async fn should_propagate_store_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_available_by_id()
            .returning(|_| Err(RepositoryError::database_error("connection reset")));

        let use_case = FindOneProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(FindOneProductParams { id: 1 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
