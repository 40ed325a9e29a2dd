// src/common/serde_utils.rs

use serde::{Deserialize, Deserializer};

/// `null` vira o valor padrão do tipo, como se a chave não existisse.
/// Para usar com `#[serde(default, deserialize_with = ...)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
