use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::daily_status::errors::DailyStatusError;
use crate::domain::daily_status::model::{DailyStatus, upsert_status};
use crate::domain::daily_status::repository::DailyStatusRepository;
use crate::domain::daily_status::use_cases::set_status::{
    SetDailyStatusParams, SetDailyStatusUseCase,
};
use crate::domain::logger::Logger;

pub struct SetDailyStatusUseCaseImpl {
    pub repository: Arc<dyn DailyStatusRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetDailyStatusUseCase for SetDailyStatusUseCaseImpl {
    async fn execute(&self, params: SetDailyStatusParams) -> Result<DailyStatus, DailyStatusError> {
        self.logger.info(&format!(
            "Setting daily status {} for {}",
            params.status, params.date
        ));

        let mut statuses = self.repository.get_all(&params.user_id).await?;
        let saved = upsert_status(&mut statuses, &params.user_id, params.date, params.status);
        self.repository.save_all(&params.user_id, &statuses).await?;

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::daily_status::value_objects::CookingStatus;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use chrono::NaiveDate;
    use mockall::mock;
    use std::sync::Mutex;

    mock! {
        pub DailyStatusRepo {}

        #[async_trait]
        impl DailyStatusRepository for DailyStatusRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<DailyStatus>, RepositoryError>;
            async fn save_all(&self, user_id: &UserId, statuses: &[DailyStatus]) -> Result<(), RepositoryError>;
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

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn should_leave_single_record_with_latest_status_when_set_twice() {
        let stored: Arc<Mutex<Vec<DailyStatus>>> = Arc::new(Mutex::new(Vec::new()));

        let mut mock_repo = MockDailyStatusRepo::new();
        let read = stored.clone();
        mock_repo
            .expect_get_all()
            .returning(move |_| Ok(read.lock().unwrap().clone()));
        let write = stored.clone();
        mock_repo.expect_save_all().returning(move |_, statuses| {
            *write.lock().unwrap() = statuses.to_vec();
            Ok(())
        });

        let use_case = SetDailyStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let first = use_case
            .execute(SetDailyStatusParams {
                user_id: UserId::new("user-1"),
                date: day(),
                status: CookingStatus::Skipped,
            })
            .await
            .unwrap();
        let second = use_case
            .execute(SetDailyStatusParams {
                user_id: UserId::new("user-1"),
                date: day(),
                status: CookingStatus::Cooked,
            })
            .await
            .unwrap();

        let saved = stored.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].status, CookingStatus::Cooked);
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn should_surface_repository_error() {
        let mut mock_repo = MockDailyStatusRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|_| Err(RepositoryError::Corrupted));

        let use_case = SetDailyStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SetDailyStatusParams {
                user_id: UserId::new("user-1"),
                date: day(),
                status: CookingStatus::Skipped,
            })
            .await;

        assert!(matches!(
            result,
            Err(DailyStatusError::Repository(RepositoryError::Corrupted))
        ));
    }
}
