use std::time::Duration;

use reqwest::Client;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// HTTP client and credentials for the OpenAI API.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    pub fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url.trim_end_matches('/'))
    }
}
