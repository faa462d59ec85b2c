use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::entity::{null_as_empty, payload_with_extra, require, AdminEntity, DraftError, EntityDraft};
use crate::api::application::ports::outgoing::endpoints;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub quote: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialDraft {
    pub name: String,
    pub role: String,
    pub quote: String,
    pub image: String,
    pub extra: Map<String, Value>,
}

impl AdminEntity for Testimonial {
    type Draft = TestimonialDraft;
    const COLLECTION: &'static str = endpoints::TESTIMONIALS;
    const LABEL: &'static str = "testimonial";

    fn id(&self) -> &str {
        &self.id
    }
}

impl EntityDraft for TestimonialDraft {
    type Entity = Testimonial;

    fn from_entity(t: &Testimonial) -> Self {
        Self {
            name: t.name.clone(),
            role: t.role.clone(),
            quote: t.quote.clone(),
            image: t.image.clone(),
            extra: t.extra.clone(),
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require("name", &self.name)?;
        require("role", &self.role)?;
        require("quote", &self.quote)
    }

    fn to_payload(&self) -> Value {
        payload_with_extra(
            &self.extra,
            vec![
                ("name", json!(self.name)),
                ("role", json!(self.role)),
                ("quote", json!(self.quote)),
                ("image", json!(self.image)),
            ],
        )
    }

    fn asset_field(&mut self) -> Option<&mut String> {
        Some(&mut self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TestimonialDraft {
        TestimonialDraft {
            name: "Ana".into(),
            role: "CTO".into(),
            quote: "Shipped on time".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_name_role_and_quote_are_required() {
        assert!(filled().validate().is_ok());

        let mut draft = filled();
        draft.name.clear();
        assert_eq!(draft.validate(), Err(DraftError::MissingField("name")));

        let mut draft = filled();
        draft.role = " ".into();
        assert_eq!(draft.validate(), Err(DraftError::MissingField("role")));

        let mut draft = filled();
        draft.quote.clear();
        assert_eq!(draft.validate(), Err(DraftError::MissingField("quote")));
    }

    #[test]
    fn test_photo_is_optional_and_sent_as_image() {
        let mut draft = filled();
        assert_eq!(
            draft.to_payload(),
            json!({ "name": "Ana", "role": "CTO", "quote": "Shipped on time", "image": "" })
        );

        if let Some(field) = draft.asset_field() {
            *field = "https://cdn.test/ana.jpg".into();
        }
        assert_eq!(draft.to_payload()["image"], json!("https://cdn.test/ana.jpg"));
    }
}
