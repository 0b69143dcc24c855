use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::{Ingredient, NewIngredientProps};
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::create::{
    CreateIngredientParams, CreateIngredientUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateIngredientUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateIngredientUseCase for CreateIngredientUseCaseImpl {
    async fn execute(&self, params: CreateIngredientParams) -> Result<Ingredient, IngredientError> {
        self.logger.info(&format!(
            "Creating ingredient: {} for user {}",
            params.name, params.user_id
        ));

        let ingredient = Ingredient::new(
            NewIngredientProps {
                user_id: params.user_id,
                name: params.name,
                category: params.category,
                production_date: params.production_date,
                shelf_life_value: params.shelf_life_value,
                shelf_life_unit: params.shelf_life_unit,
                initial_quantity: params.initial_quantity,
                quantity_unit: params.quantity_unit,
            },
            self.clock.now(),
        )?;

        let mut ingredients = self.repository.get_all(&ingredient.user_id).await?;
        ingredients.push(ingredient.clone());
        self.repository
            .save_all(&ingredient.user_id, &ingredients)
            .await?;

        self.logger.info(&format!(
            "Ingredient created with id: {} (expires {})",
            ingredient.id, ingredient.expiry_date
        ));
        Ok(ingredient)
    }
}
