//! Store types

use crate::patch;
use serde::{Deserialize, Serialize};

/// A physical retail location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
}

/// Store creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreCreate {
    pub name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
}

impl StoreCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            latitude: None,
            longitude: None,
            address: None,
        }
    }
}

/// Partial store update
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StoreUpdate {
    #[serde(default, deserialize_with = "patch::required")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub latitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub longitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch::nullable")]
    pub address: Option<Option<String>>,
}

impl Store {
    /// Overwrites every field present in the patch.
    pub fn apply(&mut self, update: StoreUpdate) {
        patch::apply(&mut self.name, update.name);
        patch::apply(&mut self.latitude, update.latitude);
        patch::apply(&mut self.longitude, update.longitude);
        patch::apply(&mut self.address, update.address);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_shop() -> Store {
        Store {
            id: 1,
            name: "Corner Shop".to_string(),
            latitude: Some(51.5),
            longitude: Some(-0.12),
            address: Some("1 High Street".to_string()),
        }
    }

    #[test]
    fn test_create_defaults_optional_fields() {
        let req: StoreCreate = serde_json::from_str(r#"{"name":"Corner Shop"}"#).unwrap();
        assert_eq!(req, StoreCreate::new("Corner Shop"));
    }

    #[test]
    fn test_create_requires_name() {
        assert!(serde_json::from_str::<StoreCreate>(r#"{"address":"x"}"#).is_err());
    }

    #[test]
    fn test_serialized_record_keeps_null_fields() {
        let store = Store {
            id: 1,
            name: "Corner Shop".to_string(),
            latitude: None,
            longitude: None,
            address: None,
        };
        assert_eq!(
            serde_json::to_string(&store).unwrap(),
            r#"{"id":1,"name":"Corner Shop","latitude":null,"longitude":null,"address":null}"#
        );
    }

    #[test]
    fn test_update_distinguishes_absent_from_null() {
        let update: StoreUpdate =
            serde_json::from_str(r#"{"address":null,"latitude":12.5}"#).unwrap();
        assert_eq!(update.name, None);
        assert_eq!(update.longitude, None);
        assert_eq!(update.address, Some(None));
        assert_eq!(update.latitude, Some(Some(12.5)));

        let mut store = corner_shop();
        store.apply(update);
        assert_eq!(store.name, "Corner Shop");
        assert_eq!(store.longitude, Some(-0.12));
        assert_eq!(store.address, None);
        assert_eq!(store.latitude, Some(12.5));
    }

    #[test]
    fn test_update_rejects_null_name() {
        assert!(serde_json::from_str::<StoreUpdate>(r#"{"name":null}"#).is_err());
    }

    #[test]
    fn test_empty_update_is_noop() {
        let update: StoreUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(update, StoreUpdate::default());

        let mut store = corner_shop();
        store.apply(update);
        assert_eq!(store, corner_shop());
    }
}
