use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::ingredient::model::select_active;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::stats::aggregator::summarize;
use crate::domain::stats::errors::StatsError;
use crate::domain::stats::model::InventorySummary;
use crate::domain::stats::use_cases::summarize::{
    SummarizeInventoryParams, SummarizeInventoryUseCase,
};

pub struct SummarizeInventoryUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SummarizeInventoryUseCase for SummarizeInventoryUseCaseImpl {
    async fn execute(
        &self,
        params: SummarizeInventoryParams,
    ) -> Result<InventorySummary, StatsError> {
        let active = select_active(self.repository.get_all(&params.user_id).await?, None);
        let summary = summarize(&active, self.clock.now());

        self.logger.info(&format!(
            "Inventory summary: {} active, {} expiring soon, {} expired",
            summary.total, summary.expiring_soon, summary.expired
        ));
        Ok(summary)
    }
}
