use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::{null_as_empty, require, DraftError};

/// The singleton "About" record. Edited in place, so the record doubles as
/// its own draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub github: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub twitter: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    pub fn validate(&self) -> Result<(), DraftError> {
        require("name", &self.name)?;
        require("title", &self.title)?;
        require("bio", &self.bio)
    }

    /// A stored profile without a name counts as not set up yet.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
    }
}
