//! Helpers for partial-update bodies.
//!
//! A patch field is `None` when the caller left it out. Fields that are
//! optional on the record itself use `Option<Option<T>>`, so that an explicit
//! JSON `null` (`Some(None)`) clears the value while omission keeps it.

use serde::{Deserialize, Deserializer};

/// Deserialise a present field, including an explicit `null`, as `Some(..)`.
///
/// Pair with `#[serde(default)]` so that an absent field stays `None`.
pub fn nullable<'de, D, T>(
  deserializer: D,
) -> Result<Option<Option<T>>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<T>::deserialize(deserializer).map(Some)
}

/// Overwrite `slot` with `value` when the patch supplied one.
pub fn overwrite<T>(slot: &mut T, value: Option<T>) {
  if let Some(value) = value {
    *slot = value;
  }
}
