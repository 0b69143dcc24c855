use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ingredient::services::{LabelExtractor, PartialIngredientDraft};
use crate::domain::ingredient::use_cases::extract_label::{ExtractLabelParams, ExtractLabelUseCase};
use crate::domain::logger::Logger;

pub struct ExtractLabelUseCaseImpl {
    pub extractor: Arc<dyn LabelExtractor>,
    /// An extractor that has not answered by then counts as failed.
    pub timeout: Duration,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExtractLabelUseCase for ExtractLabelUseCaseImpl {
    async fn execute(&self, params: ExtractLabelParams) -> Option<PartialIngredientDraft> {
        if params.image_base64.trim().is_empty() {
            self.logger.warn("Label extraction skipped: empty image");
            return None;
        }

        self.logger.info("Extracting ingredient label from image");

        match tokio::time::timeout(self.timeout, self.extractor.extract(&params.image_base64))
            .await
        {
            Ok(Ok(draft)) if draft.is_empty() => {
                self.logger.info("Label extraction returned nothing usable");
                None
            }
            Ok(Ok(draft)) => {
                self.logger.info(&format!(
                    "Label extracted: name={:?} category={:?}",
                    draft.name, draft.category
                ));
                Some(draft)
            }
            Ok(Err(e)) => {
                self.logger.warn(&format!("Label extraction failed: {}", e));
                None
            }
            Err(_) => {
                self.logger.warn(&format!(
                    "Label extraction timed out after {:?}",
                    self.timeout
                ));
                None
            }
        }
    }
}
