use chrono::{DateTime, Utc};

use super::classifier::classify;
use super::errors::IngredientError;
use super::services::PartialIngredientDraft;
use super::use_cases::create::CreateIngredientParams;
use super::value_objects::{Category, ShelfLifeUnit};
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Open,
    Submitted,
    Abandoned,
}

/// An ingredient being filled in, not yet created.
///
/// The category follows the name through `classify` until the user picks one
/// explicitly; from then on `category_locked` stays set and neither renaming
/// nor label extraction touches the category again.
#[derive(Debug, Clone)]
pub struct IngredientDraft {
    name: String,
    category: Category,
    category_locked: bool,
    pub production_date: Option<DateTime<Utc>>,
    pub shelf_life_value: Option<u32>,
    pub shelf_life_unit: ShelfLifeUnit,
    pub quantity: Option<f64>,
    pub quantity_unit: String,
    state: DraftState,
}

impl Default for IngredientDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl IngredientDraft {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            category: Category::Others,
            category_locked: false,
            production_date: None,
            shelf_life_value: None,
            shelf_life_unit: ShelfLifeUnit::Day,
            quantity: None,
            quantity_unit: String::new(),
            state: DraftState::Open,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_category_locked(&self) -> bool {
        self.category_locked
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DraftState::Open
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        if !self.category_locked {
            self.category = classify(&self.name);
        }
    }

    /// Explicit user choice. Trips the latch permanently.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.category_locked = true;
    }

    /// Merges a late extraction result into the form.
    ///
    /// Returns `false` and leaves the draft untouched when there is nothing to
    /// merge or the draft was already submitted or abandoned. Missing fields
    /// keep their current value.
    pub fn apply_extraction(&mut self, extraction: Option<PartialIngredientDraft>) -> bool {
        let Some(extraction) = extraction else {
            return false;
        };
        if !self.is_open() {
            return false;
        }

        if let Some(name) = extraction.name.filter(|n| !n.trim().is_empty()) {
            self.name = name;
            if !self.category_locked && extraction.category.is_none() {
                self.category = classify(&self.name);
            }
        }
        if let Some(label) = extraction.category
            && !self.category_locked
        {
            self.category = Category::from_label(&label);
        }
        if let Some(date) = extraction.production_date {
            self.production_date = Some(date);
        }
        if let Some(value) = extraction.shelf_life_value {
            self.shelf_life_value = Some(value);
        }
        if let Some(unit) = extraction.shelf_life_unit {
            self.shelf_life_unit = unit;
        }

        true
    }

    /// Closes the draft and turns it into creation parameters.
    ///
    /// Value checks (positive shelf life and quantity) are left to creation;
    /// only missing fields are reported here. A failed submission keeps the
    /// draft open.
    pub fn submit(&mut self, user_id: UserId) -> Result<CreateIngredientParams, IngredientError> {
        if !self.is_open() {
            return Err(IngredientError::DraftClosed);
        }
        if self.name.trim().is_empty() {
            return Err(IngredientError::NameEmpty);
        }
        let production_date = self
            .production_date
            .ok_or(IngredientError::MissingField("production_date"))?;
        let shelf_life_value = self
            .shelf_life_value
            .ok_or(IngredientError::MissingField("shelf_life_value"))?;
        let initial_quantity = self
            .quantity
            .ok_or(IngredientError::MissingField("quantity"))?;

        self.state = DraftState::Submitted;

        Ok(CreateIngredientParams {
            user_id,
            name: self.name.clone(),
            category: self.category,
            production_date,
            shelf_life_value,
            shelf_life_unit: self.shelf_life_unit,
            initial_quantity,
            quantity_unit: self.quantity_unit.clone(),
        })
    }

    pub fn abandon(&mut self) {
        if self.is_open() {
            self.state = DraftState::Abandoned;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled_draft() -> IngredientDraft {
        let mut draft = IngredientDraft::new();
        draft.set_name("牛奶");
        draft.production_date = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        draft.shelf_life_value = Some(7);
        draft.quantity = Some(500.0);
        draft.quantity_unit = "g".to_string();
        draft
    }

    #[test]
    fn should_suggest_category_from_name_while_unlocked() {
        let mut draft = IngredientDraft::new();

        draft.set_name("牛奶");
        assert_eq!(draft.category(), Category::Dairy);

        draft.set_name("牛肉");
        assert_eq!(draft.category(), Category::Meat);
        assert!(!draft.is_category_locked());
    }

    #[test]
    fn should_keep_explicit_category_when_name_changes() {
        let mut draft = IngredientDraft::new();
        draft.set_name("牛奶");

        draft.select_category(Category::Others);
        draft.set_name("苹果");

        assert_eq!(draft.category(), Category::Others);
        assert!(draft.is_category_locked());
    }

    #[test]
    fn should_merge_only_present_fields_from_extraction() {
        let mut draft = filled_draft();

        let merged = draft.apply_extraction(Some(PartialIngredientDraft {
            shelf_life_value: Some(3),
            shelf_life_unit: Some(ShelfLifeUnit::Month),
            ..Default::default()
        }));

        assert!(merged);
        assert_eq!(draft.name(), "牛奶");
        assert_eq!(draft.category(), Category::Dairy);
        assert_eq!(draft.shelf_life_value, Some(3));
        assert_eq!(draft.shelf_life_unit, ShelfLifeUnit::Month);
        assert_eq!(draft.quantity, Some(500.0));
    }

    #[test]
    fn should_map_unknown_extracted_category_to_others() {
        let mut draft = IngredientDraft::new();

        draft.apply_extraction(Some(PartialIngredientDraft {
            name: Some("Granola".to_string()),
            category: Some("breakfast".to_string()),
            ..Default::default()
        }));

        assert_eq!(draft.name(), "Granola");
        assert_eq!(draft.category(), Category::Others);
    }

    #[test]
    fn should_classify_extracted_name_when_no_category_given() {
        let mut draft = IngredientDraft::new();

        draft.apply_extraction(Some(PartialIngredientDraft {
            name: Some("Salmon fillet".to_string()),
            ..Default::default()
        }));

        assert_eq!(draft.category(), Category::Fish);
        assert!(!draft.is_category_locked());
    }

    #[test]
    fn should_not_override_locked_category_with_extraction() {
        let mut draft = IngredientDraft::new();
        draft.select_category(Category::Meat);

        draft.apply_extraction(Some(PartialIngredientDraft {
            name: Some("Yogurt".to_string()),
            category: Some("dairy".to_string()),
            ..Default::default()
        }));

        assert_eq!(draft.name(), "Yogurt");
        assert_eq!(draft.category(), Category::Meat);
    }

    #[test]
    fn should_discard_extraction_when_draft_submitted() {
        let mut draft = filled_draft();
        draft.submit(UserId::new("user-1")).unwrap();

        let merged = draft.apply_extraction(Some(PartialIngredientDraft {
            name: Some("Cheese".to_string()),
            ..Default::default()
        }));

        assert!(!merged);
        assert_eq!(draft.name(), "牛奶");
    }

    #[test]
    fn should_discard_extraction_when_draft_abandoned() {
        let mut draft = IngredientDraft::new();
        draft.abandon();

        let merged = draft.apply_extraction(Some(PartialIngredientDraft {
            name: Some("Cheese".to_string()),
            ..Default::default()
        }));

        assert!(!merged);
        assert_eq!(draft.state(), DraftState::Abandoned);
        assert_eq!(draft.name(), "");
    }

    #[test]
    fn should_ignore_absent_extraction() {
        let mut draft = filled_draft();

        assert!(!draft.apply_extraction(None));
        assert!(draft.is_open());
    }

    #[test]
    fn should_build_create_params_when_submitted() {
        let mut draft = filled_draft();

        let params = draft.submit(UserId::new("user-1")).unwrap();

        assert_eq!(params.name, "牛奶");
        assert_eq!(params.category, Category::Dairy);
        assert_eq!(params.shelf_life_value, 7);
        assert_eq!(params.initial_quantity, 500.0);
        assert_eq!(draft.state(), DraftState::Submitted);
    }

    #[test]
    fn should_stay_open_when_required_field_missing() {
        let mut draft = filled_draft();
        draft.quantity = None;

        let result = draft.submit(UserId::new("user-1"));

        assert!(matches!(result, Err(IngredientError::MissingField("quantity"))));
        assert!(draft.is_open());
    }

    #[test]
    fn should_reject_second_submission() {
        let mut draft = filled_draft();
        draft.submit(UserId::new("user-1")).unwrap();

        let result = draft.submit(UserId::new("user-1"));

        assert!(matches!(result, Err(IngredientError::DraftClosed)));
    }
}
