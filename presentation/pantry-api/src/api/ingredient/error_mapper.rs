use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::ingredient::errors::IngredientError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, internal_error};

impl IntoErrorResponse for IngredientError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        if self.is_validation() {
            return (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("ValidationError", &self.to_string()),
            );
        }

        match self {
            IngredientError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", "ingredient.not_found"),
            ),
            IngredientError::ExtractionFailed => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new("ExtractionError", "ingredient.extraction_failed"),
            ),
            _ => internal_error(),
        }
    }
}
