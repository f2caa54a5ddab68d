//! Request fields that tell an absent key apart from an explicit `null`.

use serde::{Deserialize, Deserializer};

/// Deserializes a key that is present in the payload into `Some`, keeping `null` as `Some(None)`.
///
/// Pair with `#[serde(default)]` so an absent key stays `None`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
