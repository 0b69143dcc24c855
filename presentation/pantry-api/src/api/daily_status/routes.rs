use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::clock::Clock;
use business::domain::daily_status::use_cases::get_today::{
    GetTodayStatusParams, GetTodayStatusUseCase,
};
use business::domain::daily_status::use_cases::set_status::{
    SetDailyStatusParams, SetDailyStatusUseCase,
};

use crate::api::daily_status::dto::{DailyStatusResponse, SetDailyStatusRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct DailyStatusApi {
    set_status_use_case: Arc<dyn SetDailyStatusUseCase>,
    get_today_use_case: Arc<dyn GetTodayStatusUseCase>,
    clock: Arc<dyn Clock>,
}

impl DailyStatusApi {
    pub fn new(
        set_status_use_case: Arc<dyn SetDailyStatusUseCase>,
        get_today_use_case: Arc<dyn GetTodayStatusUseCase>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            set_status_use_case,
            get_today_use_case,
            clock,
        }
    }
}

/// Daily cooking status API
#[OpenApi]
impl DailyStatusApi {
    /// Set the status of a day
    ///
    /// Replaces any status already recorded for that day.
    #[oai(path = "/daily-status", method = "put", tag = "ApiTags::DailyStatus")]
    async fn set_status(
        &self,
        auth: FirebaseBearer,
        body: Json<SetDailyStatusRequest>,
    ) -> SetDailyStatusResponse {
        let params = SetDailyStatusParams {
            user_id: auth.0,
            date: body.0.date.unwrap_or_else(|| self.clock.today()),
            status: body.0.status.into(),
        };

        match self.set_status_use_case.execute(params).await {
            Ok(status) => SetDailyStatusResponse::Ok(Json(status.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                SetDailyStatusResponse::InternalError(json)
            }
        }
    }

    /// Today's status
    ///
    /// 204 when nothing has been recorded today.
    #[oai(
        path = "/daily-status/today",
        method = "get",
        tag = "ApiTags::DailyStatus"
    )]
    async fn get_today(&self, auth: FirebaseBearer) -> GetTodayStatusResponse {
        match self
            .get_today_use_case
            .execute(GetTodayStatusParams { user_id: auth.0 })
            .await
        {
            Ok(Some(status)) => GetTodayStatusResponse::Ok(Json(status.into())),
            Ok(None) => GetTodayStatusResponse::NoContent,
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetTodayStatusResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SetDailyStatusResponse {
    #[oai(status = 200)]
    Ok(Json<DailyStatusResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTodayStatusResponse {
    #[oai(status = 200)]
    Ok(Json<DailyStatusResponse>),
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
