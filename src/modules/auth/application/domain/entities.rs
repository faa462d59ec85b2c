use chrono::{DateTime, Duration, Utc};
use email_address::EmailAddress;

/// The signed-in operator as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    pub uid: String,
    pub email: String,
}

/// Short-lived id token plus the refresh token that renews it.
#[derive(Debug, Clone)]
pub struct IdToken {
    pub value: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl IdToken {
    /// Tokens this close to expiry are renewed before use.
    pub const REFRESH_SKEW_SECS: i64 = 60;

    pub fn new(value: String, refresh_token: String, expires_in_secs: i64) -> Self {
        Self {
            value,
            refresh_token,
            expires_at: Utc::now() + Duration::seconds(expires_in_secs),
        }
    }

    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh_at(Utc::now())
    }

    fn needs_refresh_at(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(Self::REFRESH_SKEW_SECS) >= self.expires_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginFormError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Email is not a valid address")]
    InvalidEmail,
    #[error("Password is required")]
    MissingPassword,
}

/// Credentials typed into the login screen.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), LoginFormError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(LoginFormError::MissingEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(LoginFormError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(LoginFormError::MissingPassword);
        }
        Ok(())
    }
}
