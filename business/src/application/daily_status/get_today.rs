use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::daily_status::errors::DailyStatusError;
use crate::domain::daily_status::model::{DailyStatus, find_for_day};
use crate::domain::daily_status::repository::DailyStatusRepository;
use crate::domain::daily_status::use_cases::get_today::{
    GetTodayStatusParams, GetTodayStatusUseCase,
};
use crate::domain::logger::Logger;

pub struct GetTodayStatusUseCaseImpl {
    pub repository: Arc<dyn DailyStatusRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTodayStatusUseCase for GetTodayStatusUseCaseImpl {
    async fn execute(
        &self,
        params: GetTodayStatusParams,
    ) -> Result<Option<DailyStatus>, DailyStatusError> {
        let today = self.clock.today();
        self.logger
            .debug(&format!("Looking up daily status for {}", today));

        let statuses = self.repository.get_all(&params.user_id).await?;
        Ok(find_for_day(&statuses, today).cloned())
    }
}
