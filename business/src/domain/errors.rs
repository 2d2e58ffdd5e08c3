/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.database_error: {0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn database_error(details: impl Into<String>) -> Self {
        RepositoryError::DatabaseError(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_driver_details_in_database_error() {
        let error = RepositoryError::database_error("connection refused");
        assert_eq!(
            error.to_string(),
            "repository.database_error: connection refused"
        );
    }

    #[test]
    fn should_use_code_style_identifiers() {
        assert_eq!(RepositoryError::not_found().to_string(), "repository.not_found");
        assert_eq!(
            RepositoryError::persistence().to_string(),
            "repository.persistence"
        );
    }
}
