//! Serde helpers for partial updates
//!
//! A patch field is in one of three states: absent (leave the stored value
//! alone), `null` (clear it) or a value (overwrite it). Nullable columns are
//! modelled as `Option<Option<T>>` and required columns as `Option<T>` that
//! refuses `null`. Both helpers must be paired with `#[serde(default)]` so an
//! absent key falls back to `None`.

use serde::{Deserialize, Deserializer};

/// Present keys become `Some`, so `null` maps to `Some(None)`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Present keys must carry a value; `null` is a type error.
pub fn required<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Applies a patch field to a stored value.
pub fn apply<T>(target: &mut T, patch: Option<T>) {
    if let Some(value) = patch {
        *target = value;
    }
}
