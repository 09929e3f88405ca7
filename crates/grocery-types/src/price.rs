//! Price observations

use crate::patch;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The price of a product at a store, as last observed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub id: i64,
    pub store_id: i64,
    pub product_id: i64,
    pub price: f64,
    /// Set when the row is created; updates leave it alone
    pub last_updated: DateTime<Utc>,
}

/// Price creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceCreate {
    pub store_id: i64,
    pub product_id: i64,
    pub price: f64,
}

/// Partial price update
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PriceUpdate {
    #[serde(default, deserialize_with = "patch::required")]
    pub store_id: Option<i64>,
    #[serde(default, deserialize_with = "patch::required")]
    pub product_id: Option<i64>,
    #[serde(default, deserialize_with = "patch::required")]
    pub price: Option<f64>,
}

impl Price {
    pub fn apply(&mut self, update: PriceUpdate) {
        patch::apply(&mut self.store_id, update.store_id);
        patch::apply(&mut self.product_id, update.product_id);
        patch::apply(&mut self.price, update.price);
    }
}
