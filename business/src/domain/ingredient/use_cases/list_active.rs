use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::value_objects::Category;
use crate::domain::shared::value_objects::UserId;

pub struct ListActiveIngredientsParams {
    pub user_id: UserId,
    pub category: Option<Category>,
}

#[async_trait]
pub trait ListActiveIngredientsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListActiveIngredientsParams,
    ) -> Result<Vec<Ingredient>, IngredientError>;
}
