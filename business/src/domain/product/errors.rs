use crate::domain::errors::RepositoryError;

use super::model::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// No available product matches the id. Soft-deleted products land here too.
    #[error("Product with ID #{id} not found.")]
    NotFound { id: ProductId },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    pub fn not_found(id: ProductId) -> Self {
        ProductError::NotFound { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_include_id_in_not_found_message() {
        let error = ProductError::not_found(42);
        assert_eq!(error.to_string(), "Product with ID #42 not found.");
    }

    #[test]
    fn should_pass_repository_message_through() {
        let error: ProductError = RepositoryError::database_error("timeout").into();
        assert_eq!(error.to_string(), "repository.database_error: timeout");
    }
}
