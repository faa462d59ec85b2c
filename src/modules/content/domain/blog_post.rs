use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::entity::{lenient_tags, null_as_empty, parse_timestamp, payload_with_extra, require, AdminEntity, DraftError, EntityDraft};
use crate::api::application::ports::outgoing::endpoints;
use crate::shared::tags::{join_tags, split_tags};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    /// Assigned by the server, never sent back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostDraft {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image: String,
    pub tags: String,
    pub extra: Map<String, Value>,
}

impl BlogPost {
    pub fn published_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.created_at.as_ref().and_then(parse_timestamp)
    }
}

impl AdminEntity for BlogPost {
    type Draft = BlogPostDraft;
    const COLLECTION: &'static str = endpoints::BLOGS;
    const LABEL: &'static str = "blog post";

    fn id(&self) -> &str {
        &self.id
    }
}

impl EntityDraft for BlogPostDraft {
    type Entity = BlogPost;

    fn from_entity(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            summary: post.summary.clone(),
            content: post.content.clone(),
            image: post.image.clone(),
            tags: join_tags(&post.tags),
            extra: post.extra.clone(),
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require("title", &self.title)?;
        require("summary", &self.summary)?;
        require("content", &self.content)
    }

    fn to_payload(&self) -> Value {
        payload_with_extra(
            &self.extra,
            vec![
                ("title", json!(self.title)),
                ("summary", json!(self.summary)),
                ("content", json!(self.content)),
                ("image", json!(self.image)),
                ("tags", json!(split_tags(&self.tags))),
            ],
        )
    }

    fn asset_field(&mut self) -> Option<&mut String> {
        Some(&mut self.image)
    }
}
