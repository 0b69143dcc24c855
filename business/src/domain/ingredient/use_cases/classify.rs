use crate::domain::ingredient::value_objects::Category;

pub struct ClassifyIngredientParams {
    pub name: String,
}

pub trait ClassifyIngredientUseCase: Send + Sync {
    fn execute(&self, params: ClassifyIngredientParams) -> Category;
}
