use crate::domain::shared::value_objects::UserId;

/// Household member owning an inventory.
///
/// Only the id matters to the inventory engine: it scopes every collection.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub avatar: Option<String>,
}
