use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Json<Self> {
        Json(Self {
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Storage failures are never the caller's fault.
pub fn internal_error() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::new("InternalError", "repository.persistence"),
    )
}
