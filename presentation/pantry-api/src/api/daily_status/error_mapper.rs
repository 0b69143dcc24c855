use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::daily_status::errors::DailyStatusError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for DailyStatusError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            DailyStatusError::Repository(err) => err.into_error_response(),
        }
    }
}
