use async_trait::async_trait;

use crate::domain::consumption::model::ConsumptionRecord;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

pub struct GetConsumptionHistoryParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetConsumptionHistoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetConsumptionHistoryParams,
    ) -> Result<Vec<ConsumptionRecord>, RepositoryError>;
}
