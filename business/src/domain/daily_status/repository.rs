use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::DailyStatus;

#[async_trait]
pub trait DailyStatusRepository: Send + Sync {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<DailyStatus>, RepositoryError>;
    async fn save_all(
        &self,
        user_id: &UserId,
        statuses: &[DailyStatus],
    ) -> Result<(), RepositoryError>;
}
