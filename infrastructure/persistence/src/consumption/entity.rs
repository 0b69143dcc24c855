use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::consumption::model::ConsumptionRecord;
use business::domain::consumption::value_objects::ConsumptionReason;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionEntity {
    pub id: Uuid,
    pub ingredient_id: Uuid,
    pub user_id: String,
    pub consumed_quantity: f64,
    pub quantity_unit: String,
    pub consumed_at: DateTime<Utc>,
    pub reason: String,
}

impl ConsumptionEntity {
    pub fn from_domain(record: &ConsumptionRecord) -> Self {
        Self {
            id: record.id,
            ingredient_id: record.ingredient_id,
            user_id: record.user_id.to_string(),
            consumed_quantity: record.consumed_quantity,
            quantity_unit: record.quantity_unit.clone(),
            consumed_at: record.consumed_at,
            reason: record.reason.to_string(),
        }
    }

    pub fn into_domain(self) -> Result<ConsumptionRecord, RepositoryError> {
        let reason = self
            .reason
            .parse::<ConsumptionReason>()
            .map_err(|_| RepositoryError::corrupted())?;

        Ok(ConsumptionRecord::from_repository(
            self.id,
            self.ingredient_id,
            UserId::new(&self.user_id),
            self.consumed_quantity,
            self.quantity_unit,
            self.consumed_at,
            reason,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored(reason: &str) -> serde_json::Value {
        json!({
            "id": "6f1c2d3e-4b5a-4c7d-8e9f-0a1b2c3d4e5f",
            "ingredientId": "0b1c2d3e-4f5a-4b6c-8d7e-9f0a1b2c3d4e",
            "userId": "user-1",
            "consumedQuantity": 50.0,
            "quantityUnit": "g",
            "consumedAt": "2024-06-02T19:00:00Z",
            "reason": reason,
        })
    }

    #[test]
    fn should_restore_stored_reason() {
        let entity: ConsumptionEntity = serde_json::from_value(stored("discard")).unwrap();

        let record = entity.into_domain().unwrap();

        assert_eq!(record.reason, ConsumptionReason::Discard);
        assert_eq!(record.consumed_quantity, 50.0);
    }

    #[test]
    fn should_report_corrupted_when_reason_unknown() {
        let entity: ConsumptionEntity = serde_json::from_value(stored("snack")).unwrap();

        assert!(matches!(entity.into_domain(), Err(RepositoryError::Corrupted)));
    }
}
