use chrono::{DateTime, Utc};

use super::model::Ingredient;
use super::shelf_life::remaining_days;

/// Risk tiers for remaining shelf life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    /// More than 3 days left.
    Fresh,
    /// Between 0 and 3 days left, inclusive.
    ExpiringSoon,
    /// Expiry passed by at least a full day.
    Expired,
}

pub const EXPIRING_SOON_DAYS: i64 = 3;

/// Days until the ingredient expires, relative to `now`.
pub fn days_until_expiry(ingredient: &Ingredient, now: DateTime<Utc>) -> i64 {
    remaining_days(ingredient.expiry_date, now)
}

/// Business rules:
/// - remaining < 0 -> Expired
/// - 0 <= remaining <= 3 -> ExpiringSoon
/// - remaining > 3 -> Fresh
pub fn risk_level_for(days: i64) -> RiskLevel {
    if days < 0 {
        RiskLevel::Expired
    } else if days <= EXPIRING_SOON_DAYS {
        RiskLevel::ExpiringSoon
    } else {
        RiskLevel::Fresh
    }
}

pub fn get_risk_level(ingredient: &Ingredient, now: DateTime<Utc>) -> RiskLevel {
    risk_level_for(days_until_expiry(ingredient, now))
}

/// Expiring soon or already expired.
pub fn is_at_risk(ingredient: &Ingredient, now: DateTime<Utc>) -> bool {
    days_until_expiry(ingredient, now) <= EXPIRING_SOON_DAYS
}
