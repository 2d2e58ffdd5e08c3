use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProductProps, Product, ProductChanges, ProductId};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

const PRODUCT_COLUMNS: &str = "id, name, price, available, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    RepositoryError::database_error(error.to_string())
}

/// OFFSET/LIMIT are BIGINT in Postgres.
fn to_bigint(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, props: &NewProductProps) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "INSERT INTO products (name, price) VALUES ($1, $2) RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&props.name)
        .bind(props.price)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.into_domain())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn find_available(&self, skip: u64, take: u64) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE available = TRUE ORDER BY id ASC OFFSET $1 LIMIT $2"
        ))
        .bind(to_bigint(skip))
        .bind(to_bigint(take))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_available_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 AND available = TRUE LIMIT 1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn update(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"UPDATE products SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                available = COALESCE($4, available),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}"#
        ))
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.price)
        .bind(changes.available)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
