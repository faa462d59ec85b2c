use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::entity::{lenient_tags, null_as_empty, payload_with_extra, require, AdminEntity, DraftError, EntityDraft};
use crate::api::application::ports::outgoing::endpoints;
use crate::shared::tags::{join_tags, split_tags};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Image URL
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Tags are edited as one comma-separated string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub tags: String,
    pub extra: Map<String, Value>,
}

impl AdminEntity for Project {
    type Draft = ProjectDraft;
    const COLLECTION: &'static str = endpoints::PROJECTS;
    const LABEL: &'static str = "project";

    fn id(&self) -> &str {
        &self.id
    }
}

impl EntityDraft for ProjectDraft {
    type Entity = Project;

    fn from_entity(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone(),
            link: project.link.clone(),
            tags: join_tags(&project.tags),
            extra: project.extra.clone(),
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require("title", &self.title)?;
        require("description", &self.description)
    }

    fn to_payload(&self) -> Value {
        payload_with_extra(
            &self.extra,
            vec![
                ("title", json!(self.title)),
                ("description", json!(self.description)),
                ("image", json!(self.image)),
                ("link", json!(self.link)),
                ("tags", json!(split_tags(&self.tags))),
            ],
        )
    }

    fn asset_field(&mut self) -> Option<&mut String> {
        Some(&mut self.image)
    }
}
