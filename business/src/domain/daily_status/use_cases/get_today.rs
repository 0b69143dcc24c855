use async_trait::async_trait;

use crate::domain::daily_status::errors::DailyStatusError;
use crate::domain::daily_status::model::DailyStatus;
use crate::domain::shared::value_objects::UserId;

pub struct GetTodayStatusParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetTodayStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetTodayStatusParams,
    ) -> Result<Option<DailyStatus>, DailyStatusError>;
}
