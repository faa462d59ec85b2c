use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::entity::{null_as_empty, payload_with_extra, require, AdminEntity, DraftError, EntityDraft};
use crate::api::application::ports::outgoing::endpoints;

/// An offered service shown on the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub icon: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceDraft {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub extra: Map<String, Value>,
}

impl AdminEntity for Service {
    type Draft = ServiceDraft;
    const COLLECTION: &'static str = endpoints::SERVICES;
    const LABEL: &'static str = "service";

    fn id(&self) -> &str {
        &self.id
    }
}

impl EntityDraft for ServiceDraft {
    type Entity = Service;

    fn from_entity(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            icon: service.icon.clone(),
            extra: service.extra.clone(),
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
                ("icon", json!(self.icon)),
            ],
        )
    }

    fn asset_field(&mut self) -> Option<&mut String> {
        Some(&mut self.icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_description_are_required() {
        let mut draft = ServiceDraft {
            description: "APIs in Rust".into(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::MissingField("title")));

        draft.title = "Backend".into();
        draft.description = "  ".into();
        assert_eq!(draft.validate(), Err(DraftError::MissingField("description")));
    }

    #[test]
    fn test_payload_keeps_unknown_fields() {
        let service: Service = serde_json::from_value(json!({
            "id": "s1",
            "title": "Backend",
            "description": "APIs",
            "icon": null,
            "order": 2
        }))
        .unwrap();
        let mut draft = ServiceDraft::from_entity(&service);
        draft.title = "Backend services".into();

        assert_eq!(
            draft.to_payload(),
            json!({ "title": "Backend services", "description": "APIs", "icon": "", "order": 2 })
        );
    }

    #[test]
    fn test_uploaded_asset_lands_in_icon() {
        let mut draft = ServiceDraft::default();
        if let Some(field) = draft.asset_field() {
            *field = "https://cdn.test/gear.svg".into();
        }
        assert_eq!(draft.icon, "https://cdn.test/gear.svg");
    }
}
