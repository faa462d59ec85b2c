pub mod blog_post;
pub mod contact_message;
pub mod entity;
pub mod experience;
pub mod profile;
pub mod project;
pub mod service;
pub mod skill;
pub mod testimonial;

pub use blog_post::{BlogPost, BlogPostDraft};
pub use contact_message::ContactMessage;
pub use entity::{parse_timestamp, AdminEntity, DraftError, EntityDraft};
pub use experience::{Experience, ExperienceDraft};
pub use profile::Profile;
pub use project::{Project, ProjectDraft};
pub use service::{Service, ServiceDraft};
pub use skill::{Skill, SkillDraft, SkillLevel};
pub use testimonial::{Testimonial, TestimonialDraft};
