use chrono::{DateTime, Utc};

/// Store-assigned product identifier.
pub type ProductId = i32;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    /// Soft-delete marker. `false` hides the product from every read.
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new product. The store assigns `id` and
/// defaults `available` to `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductProps {
    pub name: String,
    pub price: f64,
}

/// Partial set of field changes applied by the store's update operation.
/// `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
}

impl ProductChanges {
    /// Changes that flip the availability flag off.
    pub fn mark_unavailable() -> Self {
        Self {
            available: Some(false),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.available.is_none()
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: f64,
        available: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            available,
            created_at,
            updated_at,
        }
    }

    /// Applies a change set in place, touching `updated_at`.
    pub fn apply(&mut self, changes: &ProductChanges, now: DateTime<Utc>) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(available) = changes.available {
            self.available = available;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        let now = Utc::now();
        Product::from_repository(1, "Keyboard".to_string(), 49.99, true, now, now)
    }

    #[test]
    fn should_apply_only_present_changes() {
        let mut product = product();
        let later = product.updated_at + chrono::Duration::seconds(5);

        product.apply(
            &ProductChanges {
                price: Some(39.5),
                ..ProductChanges::default()
            },
            later,
        );

        assert_eq!(product.name, "Keyboard");
        assert_eq!(product.price, 39.5);
        assert!(product.available);
        assert_eq!(product.updated_at, later);
    }

    #[test]
    fn should_only_clear_availability_when_marking_unavailable() {
        let mut product = product();
        let changes = ProductChanges::mark_unavailable();

        product.apply(&changes, Utc::now());

        assert!(!product.available);
        assert_eq!(product.name, "Keyboard");
        assert_eq!(product.price, 49.99);
    }

    #[test]
    fn should_report_empty_change_set() {
        assert!(ProductChanges::default().is_empty());
        assert!(!ProductChanges::mark_unavailable().is_empty());
    }
}
