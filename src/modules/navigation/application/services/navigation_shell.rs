use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{AdminUser, LoginForm, LoginFormError};
use crate::auth::application::ports::outgoing::{IdentityError, IdentityProvider};
use crate::navigation::application::domain::{Navigation, Route};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Failed to log in: {0}")]
    Form(#[from] LoginFormError),
    #[error("Failed to log in: {0}")]
    Identity(#[from] IdentityError),
}

/// Route table gated on the identity provider's current user.
pub struct NavigationShell {
    identity: Arc<dyn IdentityProvider>,
}

impl NavigationShell {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub fn current_user(&self) -> Option<AdminUser> {
        self.identity.current_user()
    }

    pub fn navigate(&self, path: &str) -> Navigation {
        let route = Route::from_path(path);

        if self.identity.current_user().is_none() {
            return match route {
                Some(Route::Login) => Navigation::Render(Route::Login),
                _ => Navigation::Redirect(Route::Login),
            };
        }

        match route {
            Some(route) => Navigation::Render(route),
            None => Navigation::Redirect(Route::Dashboard),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Navigation, LoginError> {
        let form = LoginForm::new(email, password);
        form.validate()?;

        match self.identity.sign_in(form.email.trim(), &form.password).await {
            Ok(user) => {
                info!(uid = %user.uid, "Signed in");
                Ok(Navigation::Redirect(Route::Dashboard))
            }
            Err(e) => {
                warn!(error = %e, "Sign-in failed");
                Err(e.into())
            }
        }
    }

    /// Always lands on the login screen; a failed sign-out is only logged.
    pub async fn logout(&self) -> Navigation {
        if let Err(e) = self.identity.sign_out().await {
            warn!(error = %e, "Sign-out failed");
        }
        Navigation::Redirect(Route::Login)
    }
}
