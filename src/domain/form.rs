//! The form state controller: a small state machine over the user's
//! five-field selection.
//!
//! Category and country changes reset their dependent field (crop type /
//! state) and the allowed option set is recomputed from the catalog.
//! Setters reject values outside the currently allowed option set, so the
//! selection can never drift out of sync with the catalog.

use serde::Serialize;

use crate::models::MetadataCatalog;

/// The five-field crop/region/season choice driving a prediction request.
/// Serialized as the snake_case JSON body of `POST /predict`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub crop_category: String,
    pub crop_type: String,
    pub country: String,
    pub state: String,
    pub season: String,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    selection: Selection,
}

impl FormState {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// True iff all five fields are set; gates the submit control.
    pub fn is_complete(&self) -> bool {
        let s = &self.selection;
        !s.crop_category.is_empty()
            && !s.crop_type.is_empty()
            && !s.country.is_empty()
            && !s.state.is_empty()
            && !s.season.is_empty()
    }

    /// The crop-type dropdown stays disabled until a category is chosen
    pub fn crop_type_enabled(&self) -> bool {
        !self.selection.crop_category.is_empty()
    }

    /// The state dropdown stays disabled until a country is chosen
    pub fn state_enabled(&self) -> bool {
        !self.selection.country.is_empty()
    }

    /// Sets the category and clears any previously chosen crop type, whose
    /// option set depended on the old category. Returns false for values
    /// not in the catalog.
    pub fn set_category(&mut self, catalog: &MetadataCatalog, value: &str) -> bool {
        if !catalog.crop_categories.iter().any(|c| c == value) {
            return false;
        }
        if self.selection.crop_category != value {
            self.selection.crop_category = value.to_string();
            self.selection.crop_type.clear();
        }
        true
    }

    pub fn set_crop_type(&mut self, catalog: &MetadataCatalog, value: &str) -> bool {
        let allowed = catalog.crop_types_for(&self.selection.crop_category);
        if !allowed.iter().any(|c| c == value) {
            return false;
        }
        self.selection.crop_type = value.to_string();
        true
    }

    /// Sets the country and clears any previously chosen state.
    pub fn set_country(&mut self, catalog: &MetadataCatalog, value: &str) -> bool {
        if !catalog.countries.iter().any(|c| c == value) {
            return false;
        }
        if self.selection.country != value {
            self.selection.country = value.to_string();
            self.selection.state.clear();
        }
        true
    }

    pub fn set_state(&mut self, catalog: &MetadataCatalog, value: &str) -> bool {
        let allowed = catalog.states_for(&self.selection.country);
        if !allowed.iter().any(|s| s == value) {
            return false;
        }
        self.selection.state = value.to_string();
        true
    }

    pub fn set_season(&mut self, catalog: &MetadataCatalog, value: &str) -> bool {
        if !catalog.seasons.iter().any(|s| s == value) {
            return false;
        }
        self.selection.season = value.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MetadataCatalog {
        serde_json::from_value(serde_json::json!({
            "crop_categories": ["Cereals", "Vegetables"],
            "countries": ["India", "USA"],
            "seasons": ["Kharif (Monsoon)", "Rabi (Winter)"],
            "crop_types_by_category": {
                "Cereals": ["Rice", "Wheat", "Maize"],
                "Vegetables": ["Tomato", "Potato"]
            },
            "states_by_country": {
                "India": ["Karnataka", "Maharashtra"],
                "USA": ["California", "Iowa"]
            }
        }))
        .unwrap()
    }

    #[test]
    fn category_options_flow_through_in_catalog_order() {
        let catalog = catalog();
        let mut form = FormState::default();
        assert!(form.set_category(&catalog, "Cereals"));
        assert_eq!(
            catalog.crop_types_for(&form.selection().crop_category),
            ["Rice", "Wheat", "Maize"]
        );
    }

    #[test]
    fn switching_category_clears_crop_type() {
        let catalog = catalog();
        let mut form = FormState::default();
        form.set_category(&catalog, "Cereals");
        form.set_crop_type(&catalog, "Rice");
        form.set_category(&catalog, "Vegetables");
        assert!(form.selection().crop_type.is_empty());
        // Old category's crop types are no longer accepted
        assert!(!form.set_crop_type(&catalog, "Rice"));
        assert!(form.set_crop_type(&catalog, "Tomato"));
    }

    #[test]
    fn switching_country_clears_state() {
        let catalog = catalog();
        let mut form = FormState::default();
        form.set_country(&catalog, "India");
        form.set_state(&catalog, "Karnataka");
        form.set_country(&catalog, "USA");
        assert!(form.selection().state.is_empty());
        assert!(!form.set_state(&catalog, "Karnataka"));
    }

    #[test]
    fn reselecting_same_category_keeps_crop_type() {
        let catalog = catalog();
        let mut form = FormState::default();
        form.set_category(&catalog, "Cereals");
        form.set_crop_type(&catalog, "Wheat");
        form.set_category(&catalog, "Cereals");
        assert_eq!(form.selection().crop_type, "Wheat");
    }

    #[test]
    fn out_of_set_values_are_rejected() {
        let catalog = catalog();
        let mut form = FormState::default();
        assert!(!form.set_category(&catalog, "Spices"));
        // No category chosen yet, so no crop type is allowed
        assert!(!form.set_crop_type(&catalog, "Rice"));
        assert!(!form.set_season(&catalog, "Monsoon"));
        assert_eq!(form.selection(), &Selection::default());
    }

    #[test]
    fn completeness_gates_submission() {
        let catalog = catalog();
        let mut form = FormState::default();
        assert!(!form.is_complete());
        assert!(!form.crop_type_enabled());
        assert!(!form.state_enabled());

        form.set_category(&catalog, "Cereals");
        form.set_crop_type(&catalog, "Rice");
        form.set_country(&catalog, "India");
        form.set_state(&catalog, "Karnataka");
        assert!(!form.is_complete()); // season still missing
        form.set_season(&catalog, "Kharif (Monsoon)");
        assert!(form.is_complete());

        // Resetting a parent field makes the form incomplete again
        form.set_country(&catalog, "USA");
        assert!(!form.is_complete());
    }

    #[test]
    fn selection_serializes_to_snake_case_body() {
        let catalog = catalog();
        let mut form = FormState::default();
        form.set_category(&catalog, "Cereals");
        form.set_crop_type(&catalog, "Rice");
        form.set_country(&catalog, "India");
        form.set_state(&catalog, "Karnataka");
        form.set_season(&catalog, "Kharif (Monsoon)");

        let body = serde_json::to_value(form.selection()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "crop_category": "Cereals",
                "crop_type": "Rice",
                "country": "India",
                "state": "Karnataka",
                "season": "Kharif (Monsoon)"
            })
        );
    }
}
