use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::ingredient::freshness::{RiskLevel, days_until_expiry, risk_level_for};
use business::domain::ingredient::model::Ingredient;
use business::domain::ingredient::services::PartialIngredientDraft;
use business::domain::ingredient::value_objects::{Category, IngredientStatus, ShelfLifeUnit};

use crate::api::consumption::dto::ConsumptionReasonDto;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum CategoryDto {
    #[oai(rename = "vegetables")]
    Vegetables,
    #[oai(rename = "fruits")]
    Fruits,
    #[oai(rename = "dairy")]
    Dairy,
    #[oai(rename = "meat")]
    Meat,
    #[oai(rename = "fish")]
    Fish,
    #[oai(rename = "others")]
    Others,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        match category {
            Category::Vegetables => CategoryDto::Vegetables,
            Category::Fruits => CategoryDto::Fruits,
            Category::Dairy => CategoryDto::Dairy,
            Category::Meat => CategoryDto::Meat,
            Category::Fish => CategoryDto::Fish,
            Category::Others => CategoryDto::Others,
        }
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        match dto {
            CategoryDto::Vegetables => Category::Vegetables,
            CategoryDto::Fruits => Category::Fruits,
            CategoryDto::Dairy => Category::Dairy,
            CategoryDto::Meat => Category::Meat,
            CategoryDto::Fish => Category::Fish,
            CategoryDto::Others => Category::Others,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ShelfLifeUnitDto {
    #[oai(rename = "day")]
    Day,
    #[oai(rename = "month")]
    Month,
    #[oai(rename = "year")]
    Year,
}

impl From<ShelfLifeUnit> for ShelfLifeUnitDto {
    fn from(unit: ShelfLifeUnit) -> Self {
        match unit {
            ShelfLifeUnit::Day => ShelfLifeUnitDto::Day,
            ShelfLifeUnit::Month => ShelfLifeUnitDto::Month,
            ShelfLifeUnit::Year => ShelfLifeUnitDto::Year,
        }
    }
}

impl From<ShelfLifeUnitDto> for ShelfLifeUnit {
    fn from(dto: ShelfLifeUnitDto) -> Self {
        match dto {
            ShelfLifeUnitDto::Day => ShelfLifeUnit::Day,
            ShelfLifeUnitDto::Month => ShelfLifeUnit::Month,
            ShelfLifeUnitDto::Year => ShelfLifeUnit::Year,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum IngredientStatusDto {
    #[oai(rename = "active")]
    Active,
    #[oai(rename = "consumed")]
    Consumed,
    #[oai(rename = "discarded")]
    Discarded,
}

impl From<IngredientStatus> for IngredientStatusDto {
    fn from(status: IngredientStatus) -> Self {
        match status {
            IngredientStatus::Active => IngredientStatusDto::Active,
            IngredientStatus::Consumed => IngredientStatusDto::Consumed,
            IngredientStatus::Discarded => IngredientStatusDto::Discarded,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum RiskLevelDto {
    #[oai(rename = "fresh")]
    Fresh,
    #[oai(rename = "expiring_soon")]
    ExpiringSoon,
    #[oai(rename = "expired")]
    Expired,
}

impl From<RiskLevel> for RiskLevelDto {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Fresh => RiskLevelDto::Fresh,
            RiskLevel::ExpiringSoon => RiskLevelDto::ExpiringSoon,
            RiskLevel::Expired => RiskLevelDto::Expired,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateIngredientRequest {
    /// Ingredient name (cannot be empty)
    pub name: String,
    /// Explicit category; suggested from the name when omitted
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<CategoryDto>,
    /// Production date
    pub production_date: DateTime<Utc>,
    /// Shelf life amount, at least 1
    pub shelf_life_value: u32,
    /// Shelf life unit (default: day)
    #[oai(skip_serializing_if_is_none)]
    pub shelf_life_unit: Option<ShelfLifeUnitDto>,
    /// Starting quantity, greater than 0
    pub initial_quantity: f64,
    /// Free-text quantity unit, e.g. "g"
    #[oai(default)]
    pub quantity_unit: String,
}

#[derive(Debug, Clone, Object)]
pub struct IngredientResponse {
    pub id: String,
    pub name: String,
    pub category: CategoryDto,
    pub production_date: DateTime<Utc>,
    pub shelf_life_value: u32,
    pub shelf_life_unit: ShelfLifeUnitDto,
    pub expiry_date: DateTime<Utc>,
    pub initial_quantity: f64,
    pub current_quantity: f64,
    pub quantity_unit: String,
    pub status: IngredientStatusDto,
    pub created_at: DateTime<Utc>,
    /// Whole days until expiry at request time, negative once expired
    pub remaining_days: i64,
    pub risk_level: RiskLevelDto,
}

impl IngredientResponse {
    pub fn from_domain(ingredient: Ingredient, now: DateTime<Utc>) -> Self {
        let remaining_days = days_until_expiry(&ingredient, now);
        Self {
            id: ingredient.id.to_string(),
            name: ingredient.name,
            category: ingredient.category.into(),
            production_date: ingredient.production_date,
            shelf_life_value: ingredient.shelf_life_value,
            shelf_life_unit: ingredient.shelf_life_unit.into(),
            expiry_date: ingredient.expiry_date,
            initial_quantity: ingredient.initial_quantity,
            current_quantity: ingredient.current_quantity,
            quantity_unit: ingredient.quantity_unit,
            status: ingredient.status.into(),
            created_at: ingredient.created_at,
            remaining_days,
            risk_level: risk_level_for(remaining_days).into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ConsumeIngredientRequest {
    /// Amount to take; anything above what is left is capped
    pub quantity: f64,
    pub reason: ConsumptionReasonDto,
}

#[derive(Debug, Clone, Object)]
pub struct ClassifyIngredientRequest {
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct ClassifyIngredientResponse {
    pub category: CategoryDto,
}

/// Request to read a food label photo.
#[derive(Debug, Clone, Object)]
pub struct ExtractLabelRequest {
    /// Base64-encoded image data, with or without a data URL prefix
    pub image_base64: String,
}

/// Pre-filled form fields read from a label. Absent fields were not readable.
#[derive(Debug, Clone, Object)]
pub struct LabelDraftResponse {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<CategoryDto>,
    #[oai(skip_serializing_if_is_none)]
    pub production_date: Option<DateTime<Utc>>,
    #[oai(skip_serializing_if_is_none)]
    pub shelf_life_value: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub shelf_life_unit: Option<ShelfLifeUnitDto>,
}

impl From<PartialIngredientDraft> for LabelDraftResponse {
    fn from(draft: PartialIngredientDraft) -> Self {
        Self {
            name: draft.name,
            category: draft
                .category
                .map(|label| Category::from_label(&label).into()),
            production_date: draft.production_date,
            shelf_life_value: draft.shelf_life_value,
            shelf_life_unit: draft.shelf_life_unit.map(|u| u.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::ingredient::model::NewIngredientProps;
    use business::domain::shared::value_objects::UserId;
    use chrono::TimeZone;

    #[test]
    fn should_report_remaining_days_and_risk_at_request_time() {
        let ingredient = Ingredient::new(
            NewIngredientProps {
                user_id: UserId::new("user-1"),
                name: "Milk".to_string(),
                category: Category::Dairy,
                production_date: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
                shelf_life_value: 7,
                shelf_life_unit: ShelfLifeUnit::Day,
                initial_quantity: 500.0,
                quantity_unit: "g".to_string(),
            },
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        )
        .unwrap();

        let response = IngredientResponse::from_domain(
            ingredient,
            Utc.with_ymd_and_hms(2024, 6, 6, 12, 0, 0).unwrap(),
        );

        assert_eq!(response.remaining_days, 2);
        assert!(matches!(response.risk_level, RiskLevelDto::ExpiringSoon));
    }

    #[test]
    fn should_map_loose_extracted_category_onto_enumeration() {
        let response = LabelDraftResponse::from(PartialIngredientDraft {
            category: Some("snacks".to_string()),
            ..Default::default()
        });

        assert!(matches!(response.category, Some(CategoryDto::Others)));
        assert!(response.name.is_none());
    }
}
