#[derive(Debug, thiserror::Error)]
pub enum DailyStatusError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
