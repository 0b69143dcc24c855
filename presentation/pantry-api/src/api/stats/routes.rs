use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::clock::Clock;
use business::domain::stats::use_cases::get_at_risk::{
    GetAtRiskIngredientsParams, GetAtRiskIngredientsUseCase,
};
use business::domain::stats::use_cases::summarize::{
    SummarizeInventoryParams, SummarizeInventoryUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::ingredient::dto::IngredientResponse;
use crate::api::security::FirebaseBearer;
use crate::api::stats::dto::InventorySummaryResponse;
use crate::api::tags::ApiTags;

pub struct StatsApi {
    summarize_use_case: Arc<dyn SummarizeInventoryUseCase>,
    at_risk_use_case: Arc<dyn GetAtRiskIngredientsUseCase>,
    clock: Arc<dyn Clock>,
}

impl StatsApi {
    pub fn new(
        summarize_use_case: Arc<dyn SummarizeInventoryUseCase>,
        at_risk_use_case: Arc<dyn GetAtRiskIngredientsUseCase>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            summarize_use_case,
            at_risk_use_case,
            clock,
        }
    }
}

/// Inventory statistics, recomputed on every request.
#[OpenApi]
impl StatsApi {
    /// Inventory summary
    #[oai(path = "/stats/summary", method = "get", tag = "ApiTags::Stats")]
    async fn get_summary(&self, auth: FirebaseBearer) -> GetSummaryResponse {
        match self
            .summarize_use_case
            .execute(SummarizeInventoryParams { user_id: auth.0 })
            .await
        {
            Ok(summary) => GetSummaryResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetSummaryResponse::InternalError(json)
            }
        }
    }

    /// At-risk ingredients
    ///
    /// Active ingredients with 3 days or fewer left, expired ones included.
    #[oai(path = "/stats/at-risk", method = "get", tag = "ApiTags::Stats")]
    async fn get_at_risk(&self, auth: FirebaseBearer) -> GetAtRiskResponse {
        match self
            .at_risk_use_case
            .execute(GetAtRiskIngredientsParams { user_id: auth.0 })
            .await
        {
            Ok(ingredients) => {
                let now = self.clock.now();
                let responses: Vec<IngredientResponse> = ingredients
                    .into_iter()
                    .map(|i| IngredientResponse::from_domain(i, now))
                    .collect();
                GetAtRiskResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetAtRiskResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSummaryResponse {
    #[oai(status = 200)]
    Ok(Json<InventorySummaryResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAtRiskResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<IngredientResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
