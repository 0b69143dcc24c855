use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::consumption::model::ConsumptionRecord;
use crate::domain::consumption::repository::ConsumptionRepository;
use crate::domain::consumption::use_cases::get_history::{
    GetConsumptionHistoryParams, GetConsumptionHistoryUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetConsumptionHistoryUseCaseImpl {
    pub repository: Arc<dyn ConsumptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetConsumptionHistoryUseCase for GetConsumptionHistoryUseCaseImpl {
    /// Most recent record first.
    async fn execute(
        &self,
        params: GetConsumptionHistoryParams,
    ) -> Result<Vec<ConsumptionRecord>, RepositoryError> {
        self.logger.info("Fetching consumption history");
        let mut records = self.repository.get_all(&params.user_id).await?;
        records.reverse();
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::consumption::value_objects::ConsumptionReason;
    use crate::domain::shared::value_objects::UserId;
    use chrono::{Duration, TimeZone, Utc};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ConsumptionRepo {}

        #[async_trait]
        impl ConsumptionRepository for ConsumptionRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<ConsumptionRecord>, RepositoryError>;
            async fn save_all(&self, user_id: &UserId, records: &[ConsumptionRecord]) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_history_newest_first() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let older = ConsumptionRecord::from_repository(
            Uuid::new_v4(),
            Uuid::new_v4(),
            UserId::new("user-1"),
            200.0,
            "g".to_string(),
            at,
            ConsumptionReason::Cooking,
        );
        let newer = ConsumptionRecord::from_repository(
            Uuid::new_v4(),
            older.ingredient_id,
            UserId::new("user-1"),
            300.0,
            "g".to_string(),
            at + Duration::hours(2),
            ConsumptionReason::Reminder,
        );
        let stored = vec![older.clone(), newer.clone()];

        let mut mock_repo = MockConsumptionRepo::new();
        mock_repo
            .expect_get_all()
            .returning(move |_| Ok(stored.clone()));

        let use_case = GetConsumptionHistoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let history = use_case
            .execute(GetConsumptionHistoryParams {
                user_id: UserId::new("user-1"),
            })
            .await
            .unwrap();

        assert_eq!(history, vec![newer, older]);
    }
}
