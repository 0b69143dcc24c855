use async_trait::async_trait;

use business::domain::ingredient::errors::IngredientError;
use business::domain::ingredient::services::{LabelExtractor, PartialIngredientDraft};

/// Stand-in used when no OpenAI key is configured. Every extraction fails,
/// which callers report as "no draft".
pub struct DisabledLabelExtractor;

#[async_trait]
impl LabelExtractor for DisabledLabelExtractor {
    async fn extract(&self, _image_base64: &str) -> Result<PartialIngredientDraft, IngredientError> {
        Err(IngredientError::ExtractionFailed)
    }
}
