use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumptionReason {
    Cooking,
    Reminder,
    Discard,
    Other,
}

impl std::fmt::Display for ConsumptionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsumptionReason::Cooking => write!(f, "cooking"),
            ConsumptionReason::Reminder => write!(f, "reminder"),
            ConsumptionReason::Discard => write!(f, "discard"),
            ConsumptionReason::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ConsumptionReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cooking" => Ok(ConsumptionReason::Cooking),
            "reminder" => Ok(ConsumptionReason::Reminder),
            "discard" => Ok(ConsumptionReason::Discard),
            "other" => Ok(ConsumptionReason::Other),
            _ => Err(format!("Invalid consumption reason: {}", s)),
        }
    }
}
