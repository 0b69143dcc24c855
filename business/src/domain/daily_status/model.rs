use chrono::NaiveDate;
use uuid::Uuid;

use super::value_objects::CookingStatus;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyStatus {
    pub id: Uuid,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub status: CookingStatus,
}

impl DailyStatus {
    pub fn new(user_id: UserId, date: NaiveDate, status: CookingStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            status,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        date: NaiveDate,
        status: CookingStatus,
    ) -> Self {
        Self {
            id,
            user_id,
            date,
            status,
        }
    }
}

pub fn find_for_day(statuses: &[DailyStatus], date: NaiveDate) -> Option<&DailyStatus> {
    statuses.iter().find(|s| s.date == date)
}

/// Overwrites the status of the record for `date` in place, or appends a new
/// one. The collection never holds two records for the same day.
pub fn upsert_status(
    statuses: &mut Vec<DailyStatus>,
    user_id: &UserId,
    date: NaiveDate,
    status: CookingStatus,
) -> DailyStatus {
    if let Some(existing) = statuses.iter_mut().find(|s| s.date == date) {
        existing.status = status;
        return existing.clone();
    }

    let created = DailyStatus::new(user_id.clone(), date, status);
    statuses.push(created.clone());
    created
}
