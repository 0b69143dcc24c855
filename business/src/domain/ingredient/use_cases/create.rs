use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::value_objects::{Category, ShelfLifeUnit};
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateIngredientParams {
    pub user_id: UserId,
    pub name: String,
    pub category: Category,
    pub production_date: DateTime<Utc>,
    pub shelf_life_value: u32,
    pub shelf_life_unit: ShelfLifeUnit,
    pub initial_quantity: f64,
    pub quantity_unit: String,
}

#[async_trait]
pub trait CreateIngredientUseCase: Send + Sync {
    async fn execute(&self, params: CreateIngredientParams) -> Result<Ingredient, IngredientError>;
}
