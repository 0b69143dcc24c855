use super::error::{ConfigError, required};

#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    pub project_id: String,
}

impl FirebaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            project_id: required("FIREBASE_PROJECT_ID")?,
        })
    }

    pub fn expected_issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }
}
