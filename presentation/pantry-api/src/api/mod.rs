pub mod consumption;
pub mod daily_status;
pub mod error;
pub mod health;
pub mod ingredient;
pub mod security;
pub mod stats;
pub mod tags;
