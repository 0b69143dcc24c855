use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::consumption::model::ConsumptionRecord;
use business::domain::consumption::value_objects::ConsumptionReason;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ConsumptionReasonDto {
    #[oai(rename = "cooking")]
    Cooking,
    #[oai(rename = "reminder")]
    Reminder,
    #[oai(rename = "discard")]
    Discard,
    #[oai(rename = "other")]
    Other,
}

impl From<ConsumptionReason> for ConsumptionReasonDto {
    fn from(reason: ConsumptionReason) -> Self {
        match reason {
            ConsumptionReason::Cooking => ConsumptionReasonDto::Cooking,
            ConsumptionReason::Reminder => ConsumptionReasonDto::Reminder,
            ConsumptionReason::Discard => ConsumptionReasonDto::Discard,
            ConsumptionReason::Other => ConsumptionReasonDto::Other,
        }
    }
}

impl From<ConsumptionReasonDto> for ConsumptionReason {
    fn from(dto: ConsumptionReasonDto) -> Self {
        match dto {
            ConsumptionReasonDto::Cooking => ConsumptionReason::Cooking,
            ConsumptionReasonDto::Reminder => ConsumptionReason::Reminder,
            ConsumptionReasonDto::Discard => ConsumptionReason::Discard,
            ConsumptionReasonDto::Other => ConsumptionReason::Other,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ConsumptionResponse {
    pub id: String,
    pub ingredient_id: String,
    /// Amount actually taken, after capping
    pub consumed_quantity: f64,
    pub quantity_unit: String,
    pub consumed_at: DateTime<Utc>,
    pub reason: ConsumptionReasonDto,
}

impl From<ConsumptionRecord> for ConsumptionResponse {
    fn from(record: ConsumptionRecord) -> Self {
        Self {
            id: record.id.to_string(),
            ingredient_id: record.ingredient_id.to_string(),
            consumed_quantity: record.consumed_quantity,
            quantity_unit: record.quantity_unit,
            consumed_at: record.consumed_at,
            reason: record.reason.into(),
        }
    }
}
