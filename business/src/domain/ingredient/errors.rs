#[derive(Debug, thiserror::Error)]
pub enum IngredientError {
    #[error("ingredient.name_empty")]
    NameEmpty,
    #[error("ingredient.invalid_shelf_life")]
    InvalidShelfLife,
    #[error("ingredient.invalid_quantity")]
    InvalidQuantity,
    #[error("ingredient.expiry_out_of_range")]
    ExpiryOutOfRange,
    #[error("ingredient.missing_field.{0}")]
    MissingField(&'static str),
    #[error("ingredient.draft_closed")]
    DraftClosed,
    #[error("ingredient.not_found")]
    NotFound,
    #[error("ingredient.extraction_failed")]
    ExtractionFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl IngredientError {
    /// True for the input errors raised before any state change.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            IngredientError::NameEmpty
                | IngredientError::InvalidShelfLife
                | IngredientError::InvalidQuantity
                | IngredientError::ExpiryOutOfRange
                | IngredientError::MissingField(_)
                | IngredientError::DraftClosed
        )
    }
}
