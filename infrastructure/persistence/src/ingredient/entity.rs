use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::ingredient::model::Ingredient;
use business::domain::ingredient::value_objects::{Category, IngredientStatus, ShelfLifeUnit};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientEntity {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub category: String,
    pub production_date: DateTime<Utc>,
    pub shelf_life_value: u32,
    pub shelf_life_unit: String,
    pub expiry_date: DateTime<Utc>,
    pub initial_quantity: f64,
    pub current_quantity: f64,
    pub quantity_unit: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl IngredientEntity {
    pub fn from_domain(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id,
            user_id: ingredient.user_id.to_string(),
            name: ingredient.name.clone(),
            category: ingredient.category.to_string(),
            production_date: ingredient.production_date,
            shelf_life_value: ingredient.shelf_life_value,
            shelf_life_unit: ingredient.shelf_life_unit.to_string(),
            expiry_date: ingredient.expiry_date,
            initial_quantity: ingredient.initial_quantity,
            current_quantity: ingredient.current_quantity,
            quantity_unit: ingredient.quantity_unit.clone(),
            status: ingredient.status.to_string(),
            created_at: ingredient.created_at,
        }
    }

    /// Unknown categories read back as `others`; an unknown unit or status
    /// means the stored collection cannot be trusted.
    pub fn into_domain(self) -> Result<Ingredient, RepositoryError> {
        let shelf_life_unit = self
            .shelf_life_unit
            .parse::<ShelfLifeUnit>()
            .map_err(|_| RepositoryError::corrupted())?;
        let status = self
            .status
            .parse::<IngredientStatus>()
            .map_err(|_| RepositoryError::corrupted())?;

        Ok(Ingredient::from_repository(
            self.id,
            UserId::new(&self.user_id),
            self.name,
            self.category.parse::<Category>().unwrap_or(Category::Others),
            self.production_date,
            self.shelf_life_value,
            shelf_life_unit,
            self.expiry_date,
            self.initial_quantity,
            self.current_quantity,
            self.quantity_unit,
            status,
            self.created_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::ingredient::model::NewIngredientProps;
    use chrono::TimeZone;
    use serde_json::json;

    fn milk() -> Ingredient {
        Ingredient::new(
            NewIngredientProps {
                user_id: UserId::new("user-1"),
                name: "牛奶".to_string(),
                category: Category::Dairy,
                production_date: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
                shelf_life_value: 7,
                shelf_life_unit: ShelfLifeUnit::Day,
                initial_quantity: 500.0,
                quantity_unit: "g".to_string(),
            },
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn should_restore_same_ingredient_from_entity() {
        let ingredient = milk();

        let restored = IngredientEntity::from_domain(&ingredient).into_domain().unwrap();

        assert_eq!(restored, ingredient);
    }

    #[test]
    fn should_store_camel_case_fields_and_lower_case_enums() {
        let value = serde_json::to_value(IngredientEntity::from_domain(&milk())).unwrap();

        assert_eq!(value["category"], json!("dairy"));
        assert_eq!(value["shelfLifeUnit"], json!("day"));
        assert_eq!(value["status"], json!("active"));
        assert_eq!(value["currentQuantity"], json!(500.0));
    }

    #[test]
    fn should_reject_unknown_status() {
        let mut entity = IngredientEntity::from_domain(&milk());
        entity.status = "melted".to_string();

        assert!(matches!(entity.into_domain(), Err(RepositoryError::Corrupted)));
    }
}
