//! Wire frames exchanged over `ws://<host>/ws`.
//!
//! Outgoing frames are a tagged enum. Inbound frames come in three shapes
//! (roster object, bare history array, bare message object) and are
//! validated into [`InboundFrame`] before anything else sees them.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

use super::types::{ChatMessage, User};

const ROSTER_FRAME_TYPE: &str = "user";

/// Frames the client sends.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutgoingFrame<'a> {
    /// Sent once, right after the socket opens.
    User { user: &'a User },
    Message {
        name: &'a str,
        #[serde(rename = "textMes")]
        text: &'a str,
    },
}

impl<'a> OutgoingFrame<'a> {
    pub fn register(user: &'a User) -> Self {
        Self::User { user }
    }

    pub fn message(user: &'a User, text: &'a str) -> Self {
        Self::Message {
            name: &user.name,
            text,
        }
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Frames the server sends, after validation.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundFrame {
    /// Full roster snapshot, in server order.
    Roster(Vec<String>),
    /// Backfill sent once after connecting, oldest first.
    History(Vec<ChatMessage>),
    Message(ChatMessage),
}

/// Decodes one text frame.
///
/// Precedence: an object whose `type` is `"user"` is a roster update, then
/// any array is a history batch, then anything else must be a single message.
pub fn decode_inbound(text: &str) -> Result<InboundFrame> {
    let value: Value = serde_json::from_str(text)?;

    if value.get("type").and_then(Value::as_str) == Some(ROSTER_FRAME_TYPE) {
        let users = value.get("users").cloned().unwrap_or(Value::Null);
        return Ok(InboundFrame::Roster(decode_roster(users)?));
    }

    if let Value::Array(entries) = value {
        return Ok(InboundFrame::History(decode_history(entries)));
    }

    Ok(InboundFrame::Message(serde_json::from_value(value)?))
}

// Entries that fail to decode are skipped so one bad message does not cost
// the whole backfill.
fn decode_history(entries: Vec<Value>) -> Vec<ChatMessage> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(message) => Some(message),
            Err(err) => {
                log::warn!("Skipping history entry {index}: {err}");
                None
            }
        })
        .collect()
}

// `users` is normally a JSON string holding the encoded array.
fn decode_roster(users: Value) -> std::result::Result<Vec<String>, serde_json::Error> {
    match users {
        Value::String(encoded) => serde_json::from_str(&encoded),
        other => serde_json::from_value(other),
    }
}
