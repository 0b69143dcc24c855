use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::{Ingredient, select_active};
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::list_active::{
    ListActiveIngredientsParams, ListActiveIngredientsUseCase,
};
use crate::domain::logger::Logger;

pub struct ListActiveIngredientsUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListActiveIngredientsUseCase for ListActiveIngredientsUseCaseImpl {
    async fn execute(
        &self,
        params: ListActiveIngredientsParams,
    ) -> Result<Vec<Ingredient>, IngredientError> {
        self.logger.info("Fetching active ingredients");
        let ingredients = self.repository.get_all(&params.user_id).await?;
        let active = select_active(ingredients, params.category);
        self.logger
            .info(&format!("Found {} active ingredients", active.len()));
        Ok(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::ingredient::model::NewIngredientProps;
    use crate::domain::ingredient::value_objects::{Category, ShelfLifeUnit};
    use crate::domain::shared::value_objects::UserId;
    use chrono::{TimeZone, Utc};
    use mockall::mock;

    mock! {
        pub IngredientRepo {}

        #[async_trait]
        impl IngredientRepository for IngredientRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<Ingredient>, RepositoryError>;
            async fn save_all(&self, user_id: &UserId, ingredients: &[Ingredient]) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn ingredient(name: &str, category: Category) -> Ingredient {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        Ingredient::new(
            NewIngredientProps {
                user_id: UserId::new("user-1"),
                name: name.to_string(),
                category,
                production_date: now,
                shelf_life_value: 5,
                shelf_life_unit: ShelfLifeUnit::Day,
                initial_quantity: 2.0,
                quantity_unit: "pc".to_string(),
            },
            now,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_active_ingredients_newest_first() {
        let carrot = ingredient("Carrot", Category::Vegetables);
        let mut eaten = ingredient("Pear", Category::Fruits);
        eaten.consume(2.0).unwrap();
        let apple = ingredient("Apple", Category::Fruits);
        let stored = vec![carrot, eaten, apple];

        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_all()
            .withf(|user_id| user_id.as_str() == "user-1")
            .returning(move |_| Ok(stored.clone()));

        let use_case = ListActiveIngredientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListActiveIngredientsParams {
                user_id: UserId::new("user-1"),
                category: None,
            })
            .await
            .unwrap();

        let names: Vec<&str> = result.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Carrot"]);
    }

    #[tokio::test]
    async fn should_filter_by_category_when_given() {
        let stored = vec![
            ingredient("Carrot", Category::Vegetables),
            ingredient("Apple", Category::Fruits),
        ];

        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_all()
            .returning(move |_| Ok(stored.clone()));

        let use_case = ListActiveIngredientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListActiveIngredientsParams {
                user_id: UserId::new("user-1"),
                category: Some(Category::Vegetables),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Carrot");
    }
}
