use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::consumption::use_cases::get_history::{
    GetConsumptionHistoryParams, GetConsumptionHistoryUseCase,
};

use crate::api::consumption::dto::ConsumptionResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct ConsumptionApi {
    history_use_case: Arc<dyn GetConsumptionHistoryUseCase>,
}

impl ConsumptionApi {
    pub fn new(history_use_case: Arc<dyn GetConsumptionHistoryUseCase>) -> Self {
        Self { history_use_case }
    }
}

#[OpenApi]
impl ConsumptionApi {
    /// Consumption history
    ///
    /// Every recorded consumption, newest first.
    #[oai(path = "/consumptions", method = "get", tag = "ApiTags::Consumptions")]
    async fn get_history(&self, auth: FirebaseBearer) -> GetHistoryResponse {
        match self
            .history_use_case
            .execute(GetConsumptionHistoryParams { user_id: auth.0 })
            .await
        {
            Ok(records) => {
                let responses: Vec<ConsumptionResponse> =
                    records.into_iter().map(|r| r.into()).collect();
                GetHistoryResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetHistoryResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ConsumptionResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
