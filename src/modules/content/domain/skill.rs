use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

use super::entity::{null_as_empty, payload_with_extra, require, AdminEntity, DraftError, EntityDraft};
use crate::api::application::ports::outgoing::endpoints;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown skill level: {0}")]
pub struct UnknownSkillLevel(pub String);

impl FromStr for SkillLevel {
    type Err = UnknownSkillLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSkillLevel(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    /// Icon URL
    #[serde(default, deserialize_with = "null_as_empty")]
    pub icon: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillDraft {
    pub name: String,
    pub level: SkillLevel,
    pub icon: String,
    pub extra: Map<String, Value>,
}

impl AdminEntity for Skill {
    type Draft = SkillDraft;
    const COLLECTION: &'static str = endpoints::SKILLS;
    const LABEL: &'static str = "skill";

    fn id(&self) -> &str {
        &self.id
    }
}

impl EntityDraft for SkillDraft {
    type Entity = Skill;

    fn from_entity(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            level: skill.level,
            icon: skill.icon.clone(),
            extra: skill.extra.clone(),
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        require("name", &self.name)
    }

    fn to_payload(&self) -> Value {
        payload_with_extra(
            &self.extra,
            vec![
                ("name", json!(self.name)),
                ("level", json!(self.level)),
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
    fn test_new_draft_defaults_to_beginner() {
        assert_eq!(SkillDraft::default().level, SkillLevel::Beginner);
    }

    #[test]
    fn test_level_is_sent_by_name() {
        let draft = SkillDraft {
            name: "Rust".into(),
            level: SkillLevel::Expert,
            ..Default::default()
        };

        assert_eq!(draft.to_payload()["level"], json!("Expert"));
    }

    #[test]
    fn test_level_parses_case_insensitively() {
        assert_eq!("advanced".parse::<SkillLevel>(), Ok(SkillLevel::Advanced));
        assert!("Guru".parse::<SkillLevel>().is_err());
    }

    #[test]
    fn test_unknown_level_on_the_wire_is_malformed() {
        let res: Result<Skill, _> =
            serde_json::from_value(json!({ "id": "s1", "name": "Rust", "level": "Guru" }));
        assert!(res.is_err());
    }
}
