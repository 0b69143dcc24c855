use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::errors::IngredientError;
use super::value_objects::ShelfLifeUnit;

/// Best-effort reading of a food label. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialIngredientDraft {
    pub name: Option<String>,
    /// Loosely typed; mapped with `Category::from_label` before use.
    pub category: Option<String>,
    pub production_date: Option<DateTime<Utc>>,
    pub shelf_life_value: Option<u32>,
    pub shelf_life_unit: Option<ShelfLifeUnit>,
}

impl PartialIngredientDraft {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.production_date.is_none()
            && self.shelf_life_value.is_none()
            && self.shelf_life_unit.is_none()
    }
}

/// Service port for reading an ingredient label from a photo.
///
/// Implementations report any failure (network, parsing, malformed answer) as
/// `IngredientError::ExtractionFailed`; callers turn it into "no draft".
#[async_trait]
pub trait LabelExtractor: Send + Sync {
    async fn extract(&self, image_base64: &str) -> Result<PartialIngredientDraft, IngredientError>;
}
