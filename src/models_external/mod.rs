use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::log;

use crate::models::RunLink;

pub mod category;
pub mod game;
pub mod personal_best;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "lenient")]
    pub rel: String,
    #[serde(deserialize_with = "lenient")]
    pub uri: String,
}

impl From<Link> for RunLink {
    fn from(value: Link) -> Self {
        RunLink { rel: value.rel.as_str().into(), uri: value.uri }
    }
}

fn from_value_or_default<T: DeserializeOwned + Default>(value: Value) -> T {
    if value.is_null() {
        return T::default();
    }
    match serde_json::from_value(value) {
        Ok(e) => e,
        Err(e) => {
            log::warn!("[REST] Unexpected field shape, using empty value: {e}");
            T::default()
        }
    }
}

/// Decodes a field, falling back to its zero value on null or a wrong type
/// so the rest of the document still decodes.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(from_value_or_default(Value::deserialize(deserializer)?))
}

/// Like `lenient`, but per element: a bad element becomes a zero value in place.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().map(from_value_or_default).collect()),
        Value::Null => Ok(vec![]),
        other => {
            log::warn!("[REST] Expected a list, got {other}, using empty list");
            Ok(vec![])
        }
    }
}
