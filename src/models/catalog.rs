//! The metadata catalog backing the dependent dropdowns.
//!
//! Fetched once at startup from `GET /metadata` and immutable afterwards.
//! Unknown lookup keys yield an empty option set rather than an error, so
//! the form simply shows a disabled dropdown for them.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataCatalog {
    #[serde(default)]
    pub crop_categories: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub seasons: Vec<String>,
    #[serde(default)]
    pub crop_types_by_category: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub states_by_country: HashMap<String, Vec<String>>,
}

impl MetadataCatalog {
    /// Crop types allowed for `category`, in catalog order. Empty if unknown.
    pub fn crop_types_for(&self, category: &str) -> &[String] {
        self.crop_types_by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// States allowed for `country`, in catalog order. Empty if unknown.
    pub fn states_for(&self, country: &str) -> &[String] {
        self.states_by_country
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.crop_categories.is_empty() && self.countries.is_empty() && self.seasons.is_empty()
    }
}
