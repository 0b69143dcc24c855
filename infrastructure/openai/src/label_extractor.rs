use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use serde_json::{Value, json};

use business::domain::ingredient::errors::IngredientError;
use business::domain::ingredient::services::{LabelExtractor, PartialIngredientDraft};
use business::domain::ingredient::value_objects::ShelfLifeUnit;

use crate::client::OpenAIClient;

const MODEL: &str = "gpt-4o";

const SYSTEM_PROMPT: &str = r#"You read food package labels for a household pantry app.
Look at the photo and return ONLY a JSON object with these fields:
- "name": short product name as printed, without brand or weight
- "category": one of "vegetables", "fruits", "dairy", "meat", "fish", "others"
- "productionDate": production or packing date as "YYYY-MM-DD"
- "shelfLifeValue": shelf life as a positive integer
- "shelfLifeUnit": "day", "month" or "year"

Use null for anything you cannot read. Do not guess dates.

Example output:
{"name":"Whole milk","category":"dairy","productionDate":"2024-06-01","shelfLifeValue":7,"shelfLifeUnit":"day"}"#;

/// Fields as the model writes them. Everything is optional and loosely typed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelReading {
    name: Option<String>,
    category: Option<String>,
    production_date: Option<String>,
    shelf_life_value: Option<Value>,
    shelf_life_unit: Option<String>,
}

pub struct LabelExtractorOpenAI {
    client: OpenAIClient,
}

impl LabelExtractorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn to_clean_data_url(raw: &str) -> String {
        let stripped = regex::Regex::new(r"^data:image/[a-z]+;base64,")
            .map(|re| re.replace(raw, "").to_string())
            .unwrap_or_else(|_| raw.to_string());
        let clean: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();
        format!("data:image/jpeg;base64,{}", clean)
    }

    fn parse_response(content: &str) -> Result<PartialIngredientDraft, IngredientError> {
        let json_str = regex::Regex::new(r"\{[\s\S]*\}")
            .ok()
            .and_then(|re| re.find(content))
            .map(|m| m.as_str())
            .ok_or(IngredientError::ExtractionFailed)?;

        let reading: LabelReading =
            serde_json::from_str(json_str).map_err(|_| IngredientError::ExtractionFailed)?;

        Ok(PartialIngredientDraft {
            name: non_blank(reading.name),
            category: non_blank(reading.category),
            production_date: reading
                .production_date
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
                .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
            shelf_life_value: reading.shelf_life_value.as_ref().and_then(positive_integer),
            shelf_life_unit: reading
                .shelf_life_unit
                .and_then(|u| u.trim().to_lowercase().parse::<ShelfLifeUnit>().ok()),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Accepts `7` as well as `"7"`; zero and fractions are dropped.
fn positive_integer(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;

    u32::try_from(number).ok().filter(|n| *n > 0)
}

#[async_trait]
impl LabelExtractor for LabelExtractorOpenAI {
    async fn extract(&self, image_base64: &str) -> Result<PartialIngredientDraft, IngredientError> {
        let image_url = Self::to_clean_data_url(image_base64);

        let body = json!({
            "model": MODEL,
            "input": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "input_image",
                            "image_url": image_url,
                            "detail": "high",
                        },
                        {
                            "type": "input_text",
                            "text": "Read this food label.",
                        },
                    ],
                },
            ],
            "temperature": 0.1,
        });

        let response = self
            .client
            .client
            .post(self.client.responses_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| IngredientError::ExtractionFailed)?;

        if !response.status().is_success() {
            return Err(IngredientError::ExtractionFailed);
        }

        let data: Value = response
            .json()
            .await
            .map_err(|_| IngredientError::ExtractionFailed)?;

        let text = data["output"]
            .as_array()
            .and_then(|outputs| outputs.iter().find(|o| o["type"] == "message"))
            .and_then(|msg| msg["content"].as_array())
            .and_then(|contents| contents.iter().find(|c| c["type"] == "output_text"))
            .and_then(|c| c["text"].as_str())
            .ok_or(IngredientError::ExtractionFailed)?;

        Self::parse_response(text)
    }
}
