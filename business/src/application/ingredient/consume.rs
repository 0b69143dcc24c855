use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::consumption::model::{ConsumptionRecord, is_first_consumption_on};
use crate::domain::consumption::repository::ConsumptionRepository;
use crate::domain::daily_status::model::{find_for_day, upsert_status};
use crate::domain::daily_status::repository::DailyStatusRepository;
use crate::domain::daily_status::rules::implicit_status;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::consume::{
    ConsumeIngredientParams, ConsumeIngredientUseCase,
};
use crate::domain::logger::Logger;

pub struct ConsumeIngredientUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub consumption_repository: Arc<dyn ConsumptionRepository>,
    pub daily_status_repository: Arc<dyn DailyStatusRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ConsumeIngredientUseCase for ConsumeIngredientUseCaseImpl {
    async fn execute(
        &self,
        params: ConsumeIngredientParams,
    ) -> Result<ConsumptionRecord, IngredientError> {
        self.logger.info(&format!(
            "Consuming {} of ingredient {} ({})",
            params.quantity, params.ingredient_id, params.reason
        ));

        let now = self.clock.now();
        let today = now.date_naive();

        let mut ingredients = self.repository.get_all(&params.user_id).await?;
        let ingredient = ingredients
            .iter_mut()
            .find(|i| i.id == params.ingredient_id && i.is_active())
            .ok_or(IngredientError::NotFound)?;

        let taken = ingredient.consume(params.quantity)?;
        if taken < params.quantity {
            self.logger.debug(&format!(
                "Requested {} but only {} left, capped",
                params.quantity, taken
            ));
        }
        let record = ConsumptionRecord::record(ingredient, taken, params.reason, now);
        let depleted = !ingredient.is_active();

        let mut ledger = self.consumption_repository.get_all(&params.user_id).await?;
        let first_today = is_first_consumption_on(&ledger, today);
        ledger.push(record.clone());

        let mut statuses = self
            .daily_status_repository
            .get_all(&params.user_id)
            .await?;
        let existing = find_for_day(&statuses, today).map(|s| s.status);
        let implied = implicit_status(existing, first_today);
        if let Some(status) = implied {
            upsert_status(&mut statuses, &params.user_id, today, status);
        }

        // No transaction spans the three collections.
        self.repository
            .save_all(&params.user_id, &ingredients)
            .await?;
        self.consumption_repository
            .save_all(&params.user_id, &ledger)
            .await?;
        if implied.is_some() {
            self.daily_status_repository
                .save_all(&params.user_id, &statuses)
                .await?;
            self.logger
                .info(&format!("Marked {} as cooked for {}", today, params.user_id));
        }

        if depleted {
            self.logger
                .info(&format!("Ingredient {} fully consumed", params.ingredient_id));
        }
        Ok(record)
    }
}
