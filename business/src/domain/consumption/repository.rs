use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::ConsumptionRecord;

/// Append-only ledger of a user's consumption records, in recording order.
#[async_trait]
pub trait ConsumptionRepository: Send + Sync {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<ConsumptionRecord>, RepositoryError>;
    async fn save_all(
        &self,
        user_id: &UserId,
        records: &[ConsumptionRecord],
    ) -> Result<(), RepositoryError>;
}
