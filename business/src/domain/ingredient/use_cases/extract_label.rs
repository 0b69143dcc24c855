use async_trait::async_trait;

use crate::domain::ingredient::services::PartialIngredientDraft;

pub struct ExtractLabelParams {
    pub image_base64: String,
}

/// Never fails: any extraction problem is reported as `None`.
#[async_trait]
pub trait ExtractLabelUseCase: Send + Sync {
    async fn execute(&self, params: ExtractLabelParams) -> Option<PartialIngredientDraft>;
}
