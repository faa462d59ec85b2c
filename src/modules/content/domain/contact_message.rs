use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::{null_as_empty, parse_timestamp};

/// A message left through the public contact form. Read-only here apart
/// from the `read` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Kept as stored; see [`ContactMessage::received_at`].
    pub created_at: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContactMessage {
    /// Sender line as listed, e.g. `Jane (jane@example.com)`.
    pub fn sender(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }

    /// `None` when the stored timestamp is missing or in a shape we don't read.
    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_ref().and_then(parse_timestamp)
    }
}
