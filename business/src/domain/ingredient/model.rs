use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::IngredientError;
use super::shelf_life::add_duration;
use super::value_objects::{Category, IngredientStatus, ShelfLifeUnit};
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub category: Category,
    pub production_date: DateTime<Utc>,
    pub shelf_life_value: u32,
    pub shelf_life_unit: ShelfLifeUnit,
    pub expiry_date: DateTime<Utc>,
    pub initial_quantity: f64,
    pub current_quantity: f64,
    pub quantity_unit: String,
    pub status: IngredientStatus,
    pub created_at: DateTime<Utc>,
}

pub struct NewIngredientProps {
    pub user_id: UserId,
    pub name: String,
    pub category: Category,
    pub production_date: DateTime<Utc>,
    pub shelf_life_value: u32,
    pub shelf_life_unit: ShelfLifeUnit,
    pub initial_quantity: f64,
    pub quantity_unit: String,
}

impl Ingredient {
    pub fn new(props: NewIngredientProps, now: DateTime<Utc>) -> Result<Self, IngredientError> {
        if props.name.trim().is_empty() {
            return Err(IngredientError::NameEmpty);
        }

        if props.shelf_life_value == 0 {
            return Err(IngredientError::InvalidShelfLife);
        }

        if !is_positive_quantity(props.initial_quantity) {
            return Err(IngredientError::InvalidQuantity);
        }

        let expiry_date = add_duration(
            props.production_date,
            props.shelf_life_value,
            props.shelf_life_unit,
        )
        .ok_or(IngredientError::ExpiryOutOfRange)?;

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            name: props.name.trim().to_string(),
            category: props.category,
            production_date: props.production_date,
            shelf_life_value: props.shelf_life_value,
            shelf_life_unit: props.shelf_life_unit,
            expiry_date,
            initial_quantity: props.initial_quantity,
            current_quantity: props.initial_quantity,
            quantity_unit: props.quantity_unit,
            status: IngredientStatus::Active,
            created_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: String,
        category: Category,
        production_date: DateTime<Utc>,
        shelf_life_value: u32,
        shelf_life_unit: ShelfLifeUnit,
        expiry_date: DateTime<Utc>,
        initial_quantity: f64,
        current_quantity: f64,
        quantity_unit: String,
        status: IngredientStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            category,
            production_date,
            shelf_life_value,
            shelf_life_unit,
            expiry_date,
            initial_quantity,
            current_quantity,
            quantity_unit,
            status,
            created_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == IngredientStatus::Active
    }

    /// Takes up to `requested` from the current quantity and returns the amount
    /// actually taken. Requests above what is left are capped, not rejected.
    ///
    /// Reaching zero marks the ingredient consumed.
    pub fn consume(&mut self, requested: f64) -> Result<f64, IngredientError> {
        if !self.is_active() {
            return Err(IngredientError::NotFound);
        }

        if !is_positive_quantity(requested) {
            return Err(IngredientError::InvalidQuantity);
        }

        let taken = requested.min(self.current_quantity);
        self.current_quantity -= taken;

        if self.current_quantity <= self.initial_quantity * DEPLETION_TOLERANCE {
            self.current_quantity = 0.0;
            self.status = IngredientStatus::Consumed;
        }

        Ok(taken)
    }
}

/// Remainders up to this fraction of the initial quantity count as zero, so
/// consuming the displayed remainder of a fractional quantity empties it.
const DEPLETION_TOLERANCE: f64 = 1e-9;

fn is_positive_quantity(quantity: f64) -> bool {
    quantity.is_finite() && quantity > 0.0
}

/// Active ingredients, most recently created first, optionally restricted to
/// one category. Collections are stored in insertion order.
pub fn select_active(ingredients: Vec<Ingredient>, category: Option<Category>) -> Vec<Ingredient> {
    ingredients
        .into_iter()
        .rev()
        .filter(|i| i.is_active())
        .filter(|i| category.is_none_or(|c| i.category == c))
        .collect()
}
