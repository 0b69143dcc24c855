use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::value_objects::ConsumptionReason;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::shared::value_objects::UserId;

/// One recorded consumption. Never mutated once written.
///
/// `ingredient_id` only refers to the ingredient; the record outlives any
/// change to it and copies the quantity unit at recording time.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionRecord {
    pub id: Uuid,
    pub ingredient_id: Uuid,
    pub user_id: UserId,
    pub consumed_quantity: f64,
    pub quantity_unit: String,
    pub consumed_at: DateTime<Utc>,
    pub reason: ConsumptionReason,
}

impl ConsumptionRecord {
    /// `consumed_quantity` is the already clamped amount.
    pub fn record(
        ingredient: &Ingredient,
        consumed_quantity: f64,
        reason: ConsumptionReason,
        consumed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            ingredient_id: ingredient.id,
            user_id: ingredient.user_id.clone(),
            consumed_quantity,
            quantity_unit: ingredient.quantity_unit.clone(),
            consumed_at,
            reason,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        ingredient_id: Uuid,
        user_id: UserId,
        consumed_quantity: f64,
        quantity_unit: String,
        consumed_at: DateTime<Utc>,
        reason: ConsumptionReason,
    ) -> Self {
        Self {
            id,
            ingredient_id,
            user_id,
            consumed_quantity,
            quantity_unit,
            consumed_at,
            reason,
        }
    }

    pub fn consumed_on(&self) -> NaiveDate {
        self.consumed_at.date_naive()
    }
}

/// True when none of `records` falls on `day`.
pub fn is_first_consumption_on(records: &[ConsumptionRecord], day: NaiveDate) -> bool {
    !records.iter().any(|r| r.consumed_on() == day)
}
