use chrono::NaiveDate;
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::daily_status::model::DailyStatus;
use business::domain::daily_status::value_objects::CookingStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum CookingStatusDto {
    #[oai(rename = "cooked")]
    Cooked,
    #[oai(rename = "not_at_home")]
    NotAtHome,
    #[oai(rename = "skipped")]
    Skipped,
}

impl From<CookingStatus> for CookingStatusDto {
    fn from(status: CookingStatus) -> Self {
        match status {
            CookingStatus::Cooked => CookingStatusDto::Cooked,
            CookingStatus::NotAtHome => CookingStatusDto::NotAtHome,
            CookingStatus::Skipped => CookingStatusDto::Skipped,
        }
    }
}

impl From<CookingStatusDto> for CookingStatus {
    fn from(dto: CookingStatusDto) -> Self {
        match dto {
            CookingStatusDto::Cooked => CookingStatus::Cooked,
            CookingStatusDto::NotAtHome => CookingStatus::NotAtHome,
            CookingStatusDto::Skipped => CookingStatus::Skipped,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SetDailyStatusRequest {
    /// Calendar day (UTC); today when omitted
    #[oai(skip_serializing_if_is_none)]
    pub date: Option<NaiveDate>,
    pub status: CookingStatusDto,
}

#[derive(Debug, Clone, Object)]
pub struct DailyStatusResponse {
    pub id: String,
    pub date: NaiveDate,
    pub status: CookingStatusDto,
}

impl From<DailyStatus> for DailyStatusResponse {
    fn from(status: DailyStatus) -> Self {
        Self {
            id: status.id.to_string(),
            date: status.date,
            status: status.status.into(),
        }
    }
}
