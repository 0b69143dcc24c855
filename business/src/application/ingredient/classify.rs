use std::sync::Arc;

use crate::domain::ingredient::classifier::classify;
use crate::domain::ingredient::use_cases::classify::{
    ClassifyIngredientParams, ClassifyIngredientUseCase,
};
use crate::domain::ingredient::value_objects::Category;
use crate::domain::logger::Logger;

pub struct ClassifyIngredientUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl ClassifyIngredientUseCase for ClassifyIngredientUseCaseImpl {
    fn execute(&self, params: ClassifyIngredientParams) -> Category {
        let category = classify(&params.name);
        self.logger
            .debug(&format!("Suggested category {} for '{}'", category, params.name));
        category
    }
}
