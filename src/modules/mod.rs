pub mod api;
pub mod auth;
pub mod content;
pub mod navigation;
