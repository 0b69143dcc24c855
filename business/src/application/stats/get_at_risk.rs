use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::ingredient::model::{Ingredient, select_active};
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::stats::aggregator::at_risk;
use crate::domain::stats::errors::StatsError;
use crate::domain::stats::use_cases::get_at_risk::{
    GetAtRiskIngredientsParams, GetAtRiskIngredientsUseCase,
};

pub struct GetAtRiskIngredientsUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAtRiskIngredientsUseCase for GetAtRiskIngredientsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAtRiskIngredientsParams,
    ) -> Result<Vec<Ingredient>, StatsError> {
        let active = select_active(self.repository.get_all(&params.user_id).await?, None);
        let risky = at_risk(active, self.clock.now());

        self.logger
            .info(&format!("Found {} at-risk ingredients", risky.len()));
        Ok(risky)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::domain::errors::RepositoryError;
    use crate::domain::ingredient::model::NewIngredientProps;
    use crate::domain::ingredient::value_objects::{Category, ShelfLifeUnit};
    use crate::domain::shared::value_objects::UserId;
    use chrono::{DateTime, TimeZone, Utc};
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
        Arc::new(logger)
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, d, 0, 0, 0).unwrap()
    }

    fn ingredient(name: &str, days: u32) -> Ingredient {
        Ingredient::new(
            NewIngredientProps {
                user_id: UserId::new("user-1"),
                name: name.to_string(),
                category: Category::Vegetables,
                production_date: day(1),
                shelf_life_value: days,
                shelf_life_unit: ShelfLifeUnit::Day,
                initial_quantity: 1.0,
                quantity_unit: "pc".to_string(),
            },
            day(1),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_include_expired_and_expiring_soon_newest_first() {
        let stored = vec![
            ingredient("expired", 2),
            ingredient("fresh", 20),
            ingredient("today", 5),
            ingredient("in three days", 8),
        ];

        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_all()
            .returning(move |_| Ok(stored.clone()));

        let use_case = GetAtRiskIngredientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            clock: Arc::new(FixedClock(day(6))),
            logger: mock_logger(),
        };

        let risky = use_case
            .execute(GetAtRiskIngredientsParams {
                user_id: UserId::new("user-1"),
            })
            .await
            .unwrap();

        let names: Vec<&str> = risky.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["in three days", "today", "expired"]);
    }
}
