use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::stats::errors::StatsError;
use crate::domain::stats::model::InventorySummary;

pub struct SummarizeInventoryParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait SummarizeInventoryUseCase: Send + Sync {
    async fn execute(&self, params: SummarizeInventoryParams)
    -> Result<InventorySummary, StatsError>;
}
