use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::consumption::model::ConsumptionRecord;
use crate::domain::consumption::value_objects::ConsumptionReason;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::shared::value_objects::UserId;

pub struct ConsumeIngredientParams {
    pub user_id: UserId,
    pub ingredient_id: Uuid,
    pub quantity: f64,
    pub reason: ConsumptionReason,
}

#[async_trait]
pub trait ConsumeIngredientUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ConsumeIngredientParams,
    ) -> Result<ConsumptionRecord, IngredientError>;
}
