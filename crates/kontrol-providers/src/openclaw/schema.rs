use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One line of an OpenClaw session log, discriminated by `type`.
///
/// Field payloads stay as raw `Value`s: the logs are written by an external
/// runtime and any field may be missing or oddly typed.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub(crate) enum LogRecord {
    Session(SessionStartRecord),
    ModelChange(ModelChangeRecord),
    Message(MessageRecord),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionStartRecord {
    #[serde(default)]
    pub timestamp: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModelChangeRecord {
    #[serde(default)]
    pub model_id: Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageRecord {
    #[serde(default, deserialize_with = "lenient_message_body")]
    pub message: MessageBody,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    pub role: Value,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub timestamp: Value,
}

/// A message event still counts when its payload is not an object, so a
/// malformed body degrades to an empty one instead of failing the line.
fn lenient_message_body<'de, D>(deserializer: D) -> std::result::Result<MessageBody, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
