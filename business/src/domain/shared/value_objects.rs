use serde::{Deserialize, Serialize};

/// Owner scope of every collection (Firebase UID).
///
/// Ingredients, consumption records and daily statuses are always read and
/// written for exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Storage key of a per-user collection, e.g. `ingredients:uid-123`.
    pub fn scoped_key(&self, collection: &str) -> String {
        format!("{}:{}", collection, self.0)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
