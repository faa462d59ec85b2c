mod identity_config;
mod identity_toolkit_service;

pub use identity_config::IdentityConfig;
pub use identity_toolkit_service::IdentityToolkitService;
