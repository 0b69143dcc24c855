use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::stats::errors::StatsError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for StatsError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            StatsError::Repository(err) => err.into_error_response(),
        }
    }
}
