use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

use crate::api::application::ports::outgoing::admin_api::{
    endpoints, AdminApi, ApiError, UploadAsset,
};
use crate::auth::application::ports::outgoing::IdentityProvider;
use crate::config::AdminConfig;
use crate::shared::api::{ErrorPayload, UploadResponse};

/// `AdminApi` over HTTP. Every call asks the identity provider for a token
/// right before sending; with nobody signed in the bearer value is empty
/// and the server decides.
#[derive(Clone)]
pub struct HttpAdminApi {
    http: reqwest::Client,
    base_url: String,
    identity: Arc<dyn IdentityProvider>,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for HttpAdminApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpAdminApi")
            .field("base_url", &self.base_url)
            .field("identity", &"<dyn IdentityProvider>")
            .finish()
    }
}

impl HttpAdminApi {
    pub fn new(config: &AdminConfig, identity: Arc<dyn IdentityProvider>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            identity,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn bearer(&self) -> Result<String, ApiError> {
        let token = self.identity.id_token().await?;
        Ok(format!("Bearer {}", token.unwrap_or_default()))
    }

    /// Sends one request and returns status plus raw body.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<(StatusCode, String), ApiError> {
        let mut request = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.bearer().await?);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok((status, text))
    }

    /// Write calls: a failed status carries the server's message when it sent one.
    async fn write(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let outcome = match self.send(method.clone(), path, body).await {
            Ok((status, text)) if status.is_success() => parse_body(&text),
            Ok((status, text)) => Err(ApiError::Status {
                status: status.as_u16(),
                message: ErrorPayload::parse(&text).into_message(),
            }),
            Err(e) => Err(e),
        };

        if let Err(e) = &outcome {
            error!(method = %method, path = %path, error = %e, "Admin API write failed");
        }
        outcome
    }
}

fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn read(&self, path: &str) -> Result<Value, ApiError> {
        let outcome = match self.send(Method::GET, path, None).await {
            Ok((status, text)) if status.is_success() => parse_body(&text),
            // reads never surface the server's message
            Ok((status, _)) => Err(ApiError::Status {
                status: status.as_u16(),
                message: None,
            }),
            Err(e) => Err(e),
        };

        if let Err(e) = &outcome {
            // the view-model decides whether a failed read matters
            debug!(path = %path, error = %e, "Admin API read failed");
        }
        outcome
    }

    async fn create(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.write(Method::POST, path, Some(&body)).await
    }

    async fn update(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.write(Method::PUT, path, Some(&body)).await
    }

    async fn remove(&self, path: &str) -> Result<Value, ApiError> {
        self.write(Method::DELETE, path, None).await
    }

    async fn upload_asset(&self, asset: UploadAsset) -> Result<String, ApiError> {
        let outcome = async {
            let mime = asset.mime();
            let part = reqwest::multipart::Part::bytes(asset.bytes)
                .file_name(asset.file_name)
                .mime_str(&mime)
                .map_err(|e| ApiError::Transport(format!("invalid content type: {}", e)))?;
            let form = reqwest::multipart::Form::new().part("image", part);

            // no JSON content type here, the multipart boundary header is set by reqwest
            let response = self
                .http
                .post(self.url(endpoints::UPLOAD))
                .header(AUTHORIZATION, self.bearer().await?)
                .multipart(form)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            if !status.is_success() {
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    message: Some("Upload Failed".to_string()),
                });
            }

            serde_json::from_str::<UploadResponse>(&text)
                .map(|r| r.url)
                .map_err(|e| ApiError::MalformedBody(e.to_string()))
        }
        .await;

        if let Err(e) = &outcome {
            error!(error = %e, "Asset upload failed");
        }
        outcome
    }
}
