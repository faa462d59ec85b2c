use async_trait::async_trait;
use std::error::Error;
use std::fmt;

use crate::auth::application::domain::entities::AdminUser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    InvalidCredentials,
    SessionExpired,
    Provider(String),
    Network(String),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::InvalidCredentials => write!(f, "Invalid email or password"),
            IdentityError::SessionExpired => write!(f, "Session expired, please sign in again"),
            IdentityError::Provider(msg) => write!(f, "Identity provider error: {}", msg),
            IdentityError::Network(msg) => write!(f, "Identity provider unreachable: {}", msg),
        }
    }
}
impl Error for IdentityError {}

/// The external identity service. The console only ever asks it for the
/// current user, a token for that user, and sign-in/sign-out.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `None` when nobody is signed in.
    fn current_user(&self) -> Option<AdminUser>;

    /// A token for the current user, renewed by the provider when needed.
    /// `Ok(None)` when nobody is signed in.
    async fn id_token(&self) -> Result<Option<String>, IdentityError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminUser, IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;
}
