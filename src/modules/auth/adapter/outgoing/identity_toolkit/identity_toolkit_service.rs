use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::RwLock;

use crate::auth::application::domain::entities::{AdminUser, IdToken};
use crate::auth::application::ports::outgoing::identity_provider::{
    IdentityError, IdentityProvider,
};

use super::identity_config::IdentityConfig;

#[derive(Debug, Clone)]
struct Session {
    user: AdminUser,
    token: IdToken,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    grant_type: &'static str,
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Deserialize, Default)]
struct ProviderErrorBody {
    #[serde(default)]
    error: Option<ProviderError>,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

fn parse_expires_in(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(DEFAULT_EXPIRES_IN_SECS)
}

/// Maps the provider's error codes (e.g. `INVALID_PASSWORD : ...`) to our errors.
fn map_sign_in_error(code: &str) -> IdentityError {
    let code = code.split(':').next().unwrap_or(code).trim();
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS"
        | "INVALID_EMAIL" | "MISSING_PASSWORD" => IdentityError::InvalidCredentials,
        other => IdentityError::Provider(other.to_string()),
    }
}

fn map_refresh_error(code: &str) -> IdentityError {
    let code = code.split(':').next().unwrap_or(code).trim();
    match code {
        "TOKEN_EXPIRED" | "INVALID_REFRESH_TOKEN" | "USER_DISABLED" | "USER_NOT_FOUND" => {
            IdentityError::SessionExpired
        }
        other => IdentityError::Provider(other.to_string()),
    }
}

/// Identity Toolkit REST client holding the signed-in session in memory.
pub struct IdentityToolkitService {
    config: IdentityConfig,
    http: reqwest::Client,
    session: RwLock<Option<Session>>,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for IdentityToolkitService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityToolkitService")
            .field("config", &"IdentityConfig")
            .field("signed_in", &self.current_user().is_some())
            .finish()
    }
}

impl IdentityToolkitService {
    pub fn new(config: IdentityConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: IdentityConfig, http: reqwest::Client) -> Self {
        Self {
            config,
            http,
            session: RwLock::new(None),
        }
    }

    fn snapshot(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn store(&self, session: Option<Session>) {
        *self
            .session
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = session;
    }

    async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<Result<R, String>, IdentityError>
    where
        B: Serialize + ?Sized + Sync,
        R: for<'de> Deserialize<'de>,
    {
        let res = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        if status.is_success() {
            serde_json::from_str::<R>(&text)
                .map(Ok)
                .map_err(|e| IdentityError::Provider(format!("malformed response: {}", e)))
        } else {
            let body: ProviderErrorBody = serde_json::from_str(&text).unwrap_or_default();
            let code = body
                .error
                .map(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            Ok(Err(code))
        }
    }

    async fn refresh(&self, session: Session) -> Result<Session, IdentityError> {
        let request = RefreshRequest {
            grant_type: "refresh_token",
            refresh_token: &session.token.refresh_token,
        };

        match self
            .post_json::<_, RefreshResponse>(&self.config.refresh_url(), &request)
            .await?
        {
            Ok(refreshed) => Ok(Session {
                user: session.user,
                token: IdToken::new(
                    refreshed.id_token,
                    refreshed.refresh_token,
                    parse_expires_in(&refreshed.expires_in),
                ),
            }),
            Err(code) => Err(map_refresh_error(&code)),
        }
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitService {
    fn current_user(&self) -> Option<AdminUser> {
        self.snapshot().map(|s| s.user)
    }

    async fn id_token(&self) -> Result<Option<String>, IdentityError> {
        let Some(session) = self.snapshot() else {
            return Ok(None);
        };

        if !session.token.needs_refresh() {
            return Ok(Some(session.token.value));
        }

        match self.refresh(session).await {
            Ok(renewed) => {
                let token = renewed.token.value.clone();
                self.store(Some(renewed));
                Ok(Some(token))
            }
            Err(IdentityError::SessionExpired) => {
                tracing::warn!("Identity session could not be renewed, signing out");
                self.store(None);
                Err(IdentityError::SessionExpired)
            }
            Err(e) => Err(e),
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminUser, IdentityError> {
        let request = SignInRequest {
            email,
            password,
            return_secure_token: true,
        };

        match self
            .post_json::<_, SignInResponse>(&self.config.sign_in_url(), &request)
            .await?
        {
            Ok(signed_in) => {
                let user = AdminUser {
                    uid: signed_in.local_id,
                    email: signed_in.email,
                };
                self.store(Some(Session {
                    user: user.clone(),
                    token: IdToken::new(
                        signed_in.id_token,
                        signed_in.refresh_token,
                        parse_expires_in(&signed_in.expires_in),
                    ),
                }));
                tracing::info!(uid = %user.uid, "Operator signed in");
                Ok(user)
            }
            Err(code) => Err(map_sign_in_error(&code)),
        }
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.store(None);
        tracing::info!("Operator signed out");
        Ok(())
    }
}
