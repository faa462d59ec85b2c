pub mod config;
pub mod modules;
pub mod shared;

pub use modules::api;
pub use modules::auth;
pub use modules::content;
pub use modules::navigation;

#[cfg(test)]
mod tests;
