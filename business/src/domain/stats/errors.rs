#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
