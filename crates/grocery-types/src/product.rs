//! Product types

use crate::patch;
use serde::{Deserialize, Serialize};

/// A purchasable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    /// Unit of measure, e.g. "L", "g", "item"
    pub unit: Option<String>,
    /// Magnitude in `unit`, e.g. 1.0 for 1L, 500 for 500g
    pub size: Option<f64>,
}

/// Product creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub size: Option<f64>,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            brand: None,
            unit: None,
            size: None,
        }
    }
}

/// Partial product update
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductUpdate {
    #[serde(default, deserialize_with = "patch::required")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::required")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub brand: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub unit: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub size: Option<Option<f64>>,
}

impl Product {
    pub fn apply(&mut self, update: ProductUpdate) {
        patch::apply(&mut self.name, update.name);
        patch::apply(&mut self.category, update.category);
        patch::apply(&mut self.brand, update.brand);
        patch::apply(&mut self.unit, update.unit);
        patch::apply(&mut self.size, update.size);
    }
}
