use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identity assigned by the server after a successful nickname claim.
///
/// The server may attach extra fields; they are kept so the registration
/// frame echoes back exactly what the server handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// A chat line, as it travels over the socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub name: String,
    #[serde(rename = "textMes")]
    pub text: String,
    /// Epoch milliseconds, assigned by the server.
    #[serde(
        default,
        deserialize_with = "deserialize_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<i64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Millis {
    Whole(i64),
    Fractional(f64),
}

// Servers that build the timestamp from a float clock send e.g. `1700000000000.0`.
fn deserialize_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Millis>::deserialize(deserializer)?.map(|millis| match millis {
        Millis::Whole(value) => value,
        Millis::Fractional(value) => value.trunc() as i64,
    }))
}
