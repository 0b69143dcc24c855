use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::daily_status::model::DailyStatus;
use business::domain::daily_status::value_objects::CookingStatus;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

/// `date` is stored as `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatusEntity {
    pub id: Uuid,
    pub user_id: String,
    pub date: NaiveDate,
    pub status: String,
}

impl DailyStatusEntity {
    pub fn from_domain(status: &DailyStatus) -> Self {
        Self {
            id: status.id,
            user_id: status.user_id.to_string(),
            date: status.date,
            status: status.status.to_string(),
        }
    }

    pub fn into_domain(self) -> Result<DailyStatus, RepositoryError> {
        let status = self
            .status
            .parse::<CookingStatus>()
            .map_err(|_| RepositoryError::corrupted())?;

        Ok(DailyStatus::from_repository(
            self.id,
            UserId::new(&self.user_id),
            self.date,
            status,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_date_as_calendar_day() {
        let status = DailyStatus::new(
            UserId::new("user-1"),
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            CookingStatus::NotAtHome,
        );

        let value = serde_json::to_value(DailyStatusEntity::from_domain(&status)).unwrap();

        assert_eq!(value["date"], json!("2024-06-03"));
        assert_eq!(value["status"], json!("not_at_home"));
        assert_eq!(value["userId"], json!("user-1"));
    }
}
