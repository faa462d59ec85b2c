mod busy_flag;
pub mod collection_view_model;
pub mod dashboard_view_model;
pub mod messages_view_model;
pub mod profile_view_model;

pub use collection_view_model::{CollectionViewModel, ViewModelError, DELETE_CONFIRMATION};
pub use dashboard_view_model::{DashboardStats, DashboardViewModel};
pub use messages_view_model::MessagesViewModel;
pub use profile_view_model::{ProfileViewModel, PROFILE_SAVED, PROFILE_SAVE_FAILED};

use crate::content::domain::{BlogPost, Experience, Project, Service, Skill, Testimonial};

pub type ProjectsViewModel = CollectionViewModel<Project>;
pub type SkillsViewModel = CollectionViewModel<Skill>;
pub type BlogsViewModel = CollectionViewModel<BlogPost>;
pub type ExperienceViewModel = CollectionViewModel<Experience>;
pub type TestimonialsViewModel = CollectionViewModel<Testimonial>;
pub type ServicesViewModel = CollectionViewModel<Service>;
