use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::find_one::{FindOneProductParams, FindOneProductUseCase};
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub find_one: Arc<dyn FindOneProductUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let current = self
            .find_one
            .execute(FindOneProductParams { id: params.id })
            .await?;

        let changes = ProductChanges {
            name: params.name,
            price: params.price,
            available: None,
        };
        if changes.is_empty() {
            self.logger
                .debug(&format!("No changes for product {}, skipping write", current.id));
            return Ok(current);
        }

        let product = self.repository.update(params.id, &changes).await?;

        self.logger.info(&format!("Product updated: {}", product.id));
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

    fn product(id: ProductId, name: &str, price: f64) -> Product {
        let now = Utc::now();
        Product::from_repository(id, name.to_string(), price, true, now, now)
    }

    #[tokio::test]
    async fn should_apply_changes_after_availability_check() {
        let mut find_one = MockFindOne::new();
        find_one
            .expect_execute()
            .withf(|params| params.id == 5)
            .times(1)
            .returning(|params| Ok(product(params.id, "Laptop", 999.0)));

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .withf(|id, changes| {
                *id == 5
                    && changes.name.as_deref() == Some("Laptop Pro")
                    && changes.price.is_none()
                    && changes.available.is_none()
            })
            .times(1)
            .returning(|id, _| Ok(product(id, "Laptop Pro", 999.0)));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            find_one: Arc::new(find_one),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateProductParams {
                id: 5,
                name: Some("Laptop Pro".to_string()),
                price: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.id, 5);
        assert_eq!(updated.name, "Laptop Pro");
    }

    #[tokio::test]
    async fn should_return_current_product_when_nothing_changes() {
        let mut find_one = MockFindOne::new();
        find_one
            .expect_execute()
            .times(1)
            .returning(|params| Ok(product(params.id, "Chair", 80.0)));

        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            find_one: Arc::new(find_one),
            logger: mock_logger(),
        };

        let unchanged = use_case
            .execute(UpdateProductParams {
                id: 9,
                name: None,
                price: None,
            })
            .await
            .unwrap();

        assert_eq!(unchanged.name, "Chair");
        assert_eq!(unchanged.price, 80.0);
    }

    #[tokio::test]
    async fn should_not_touch_store_when_product_not_found() {
        let mut find_one = MockFindOne::new();
        find_one
            .expect_execute()
            .returning(|params| Err(ProductError::not_found(params.id)));

        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            find_one: Arc::new(find_one),
            logger: mock_logger(),
        };

        let error = use_case
            .execute(UpdateProductParams {
                id: 12,
                name: None,
                price: Some(1.0),
            })
            .await
            .unwrap_err();

        assert!(matches!(error, ProductError::NotFound { id: 12 }));
        assert_eq!(error.to_string(), "Product with ID #12 not found.");
    }

    #[tokio::test]
    async fn should_propagate_store_failure_on_update() {
        let mut find_one = MockFindOne::new();
        find_one
            .expect_execute()
            .returning(|params| Ok(product(params.id, "Desk", 150.0)));

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_update()
            .with(eq(2), mockall::predicate::always())
            .returning(|_, _| Err(RepositoryError::database_error("deadlock detected")));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            find_one: Arc::new(find_one),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 2,
                name: None,
                price: Some(140.0),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
