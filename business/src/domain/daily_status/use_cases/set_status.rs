use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::daily_status::errors::DailyStatusError;
use crate::domain::daily_status::model::DailyStatus;
use crate::domain::daily_status::value_objects::CookingStatus;
use crate::domain::shared::value_objects::UserId;

pub struct SetDailyStatusParams {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub status: CookingStatus,
}

#[async_trait]
pub trait SetDailyStatusUseCase: Send + Sync {
    async fn execute(&self, params: SetDailyStatusParams) -> Result<DailyStatus, DailyStatusError>;
}
