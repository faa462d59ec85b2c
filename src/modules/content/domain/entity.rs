use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::shared::tags::split_tags;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// A record kept in one of the store's collections.
pub trait AdminEntity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Draft: EntityDraft<Entity = Self>;

    /// Collection endpoint, e.g. `/projects`.
    const COLLECTION: &'static str;

    /// Human name used in logs.
    const LABEL: &'static str;

    fn id(&self) -> &str;
}

/// Editable form state for an entity, shared by the create and update flows.
pub trait EntityDraft: Default + Clone + Send + Sync + 'static {
    type Entity;

    fn from_entity(entity: &Self::Entity) -> Self;

    /// Required-field check run before any request is made.
    fn validate(&self) -> Result<(), DraftError>;

    /// Write body sent on create and update.
    fn to_payload(&self) -> Value;

    /// The field an uploaded asset URL lands in (`image` or `icon`).
    fn asset_field(&mut self) -> Option<&mut String> {
        None
    }
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        Err(DraftError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Builds a write body: unknown fields kept from the record, typed fields on top.
pub(crate) fn payload_with_extra(extra: &Map<String, Value>, fields: Vec<(&str, Value)>) -> Value {
    let mut body = extra.clone();
    for (key, value) in fields {
        body.insert(key.to_string(), value);
    }
    Value::Object(body)
}

/// Where a field was `null` on the stored record and the draft left it
/// blank, send `null` back instead of `""` or `[]`.
pub(crate) fn keep_wire_nulls(payload: &mut Value, wire: &Value) {
    let (Some(body), Some(stored)) = (payload.as_object_mut(), wire.as_object()) else {
        return;
    };
    for (key, value) in body.iter_mut() {
        let blank = match value {
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            _ => false,
        };
        if blank && matches!(stored.get(key), Some(Value::Null)) {
            *value = Value::Null;
        }
    }
}

/// Missing or `null` strings read as empty.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Tags as stored by any version of the console: a list, one
/// comma-separated string, or `null`.
pub(crate) fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Value::String(s) => split_tags(&s),
        _ => Vec::new(),
    })
}

/// Reads a display timestamp in the shapes the store has used: RFC 3339
/// text, epoch milliseconds, or a `{ "_seconds", "_nanoseconds" }` object.
pub fn parse_timestamp(raw: &Value) -> Option<DateTime<Utc>> {
    match raw {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::Object(fields) => {
            let secs = fields
                .get("_seconds")
                .or_else(|| fields.get("seconds"))
                .and_then(Value::as_i64)?;
            let nanos = fields
                .get("_nanoseconds")
                .or_else(|| fields.get("nanoseconds"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            DateTime::from_timestamp(secs, u32::try_from(nanos).unwrap_or(0))
        }
        _ => None,
    }
}
