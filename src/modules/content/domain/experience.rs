use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::entity::{
    null_as_empty, payload_with_extra, require, AdminEntity, DraftError, EntityDraft,
};
use crate::api::application::ports::outgoing::endpoints;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub start_date: String,
    /// Stored as-is: `""` and `null` both mean "no end date" and are sent
    /// back the way they came.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub current: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `end_date` and `current` are private so that marking the position as
/// current always clears the end date in the same update.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceDraft {
    pub company: String,
    pub position: String,
    pub start_date: String,
    end_date: Option<String>,
    pub description: String,
    current: bool,
    pub extra: Map<String, Value>,
}

impl Default for ExperienceDraft {
    fn default() -> Self {
        Self {
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: Some(String::new()),
            description: String::new(),
            current: false,
            extra: Map::new(),
        }
    }
}

impl ExperienceDraft {
    pub fn end_date(&self) -> &str {
        self.end_date.as_deref().unwrap_or("")
    }

    pub fn is_current(&self) -> bool {
        self.current
    }

    pub fn set_current(&mut self, current: bool) {
        self.current = current;
        if current {
            if let Some(end_date) = self.end_date.as_mut() {
                end_date.clear();
            }
        }
    }

    /// Ignored while the position is current.
    pub fn set_end_date(&mut self, end_date: impl Into<String>) {
        if !self.current {
            self.end_date = Some(end_date.into());
        }
    }
}

impl AdminEntity for Experience {
    type Draft = ExperienceDraft;
    const COLLECTION: &'static str = endpoints::EXPERIENCE;
    const LABEL: &'static str = "experience";

    fn id(&self) -> &str {
        &self.id
    }
}

impl EntityDraft for ExperienceDraft {
    type Entity = Experience;

    fn from_entity(exp: &Experience) -> Self {
        Self {
            company: exp.company.clone(),
            position: exp.position.clone(),
            start_date: exp.start_date.clone(),
            end_date: if exp.current {
                exp.end_date.as_ref().map(|_| String::new())
            } else {
                exp.end_date.clone()
            },
            description: exp.description.clone(),
            current: exp.current,
            extra: exp.extra.clone(),
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require("company", &self.company)?;
        require("position", &self.position)?;
        require("startDate", &self.start_date)?;
        require("description", &self.description)
    }

    fn to_payload(&self) -> Value {
        payload_with_extra(
            &self.extra,
            vec![
                ("company", json!(self.company)),
                ("position", json!(self.position)),
                ("startDate", json!(self.start_date)),
                ("endDate", json!(self.end_date)),
                ("description", json!(self.description)),
                ("current", json!(self.current)),
            ],
        )
    }
}
