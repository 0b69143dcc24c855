use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, internal_error};

impl IntoErrorResponse for RepositoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        internal_error()
    }
}
