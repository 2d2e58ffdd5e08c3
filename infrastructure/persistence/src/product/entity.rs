use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.price,
            self.available,
            self.created_at,
            self.updated_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_entity_columns_to_domain() {
        let now = Utc::now();
        let entity = ProductEntity {
            id: 11,
            name: "Router".to_string(),
            price: 64.9,
            available: false,
            created_at: now,
            updated_at: now,
        };

        let product = entity.into_domain();

        assert_eq!(product.id, 11);
        assert_eq!(product.name, "Router");
        assert_eq!(product.price, 64.9);
        assert!(!product.available);
    }
}
