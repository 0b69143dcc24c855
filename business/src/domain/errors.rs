/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.database_error")]
    DatabaseError,
    /// A stored collection could not be decoded back into domain entities.
    #[error("repository.corrupted")]
    Corrupted,
}

impl RepositoryError {
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
    pub fn corrupted() -> Self {
        RepositoryError::Corrupted
    }
}
