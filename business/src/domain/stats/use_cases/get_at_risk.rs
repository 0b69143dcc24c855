use async_trait::async_trait;

use crate::domain::ingredient::model::Ingredient;
use crate::domain::shared::value_objects::UserId;
use crate::domain::stats::errors::StatsError;

pub struct GetAtRiskIngredientsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAtRiskIngredientsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAtRiskIngredientsParams,
    ) -> Result<Vec<Ingredient>, StatsError>;
}
