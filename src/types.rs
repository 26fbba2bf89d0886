use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Credit usage reported alongside every reply.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct Credits {
    #[serde(default)]
    pub consumed: Value,
    #[serde(default)]
    pub remaining_balance: Value,
}

/// Decoded body of every API reply.
///
/// `message` has no fixed schema: depending on the endpoint it holds a string,
/// an object or an array. Service-level failures (4xx/5xx) decode into the same
/// shape, so callers inspect `message` to tell them apart.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct Response {
    #[serde(default)]
    pub message: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub credits: Credits,
}

impl Response {
    /// Decodes a reply body. A bare `null` body yields an empty response.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(serde_json::from_slice::<Option<Self>>(body)?.unwrap_or_default())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
