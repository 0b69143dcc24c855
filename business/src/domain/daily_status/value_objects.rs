use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingStatus {
    Cooked,
    NotAtHome,
    Skipped,
}

impl std::fmt::Display for CookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CookingStatus::Cooked => write!(f, "cooked"),
            CookingStatus::NotAtHome => write!(f, "not_at_home"),
            CookingStatus::Skipped => write!(f, "skipped"),
        }
    }
}

impl std::str::FromStr for CookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cooked" => Ok(CookingStatus::Cooked),
            "not_at_home" => Ok(CookingStatus::NotAtHome),
            "skipped" => Ok(CookingStatus::Skipped),
            _ => Err(format!("Invalid cooking status: {}", s)),
        }
    }
}
