// src/modules/api/application/ports/outgoing/admin_api.rs

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

use crate::auth::application::ports::outgoing::IdentityError;

//
// ──────────────────────────────────────────────────────────
// Endpoints
// ──────────────────────────────────────────────────────────
//

pub mod endpoints {
    pub const PROJECTS: &str = "/projects";
    pub const SKILLS: &str = "/skills";
    pub const BLOGS: &str = "/blogs";
    pub const EXPERIENCE: &str = "/experience";
    pub const TESTIMONIALS: &str = "/testimonials";
    pub const SERVICES: &str = "/services";
    pub const CONTACT: &str = "/contact";
    pub const ABOUT: &str = "/about";
    pub const UPLOAD: &str = "/upload";

    /// `{collection}/{id}`
    pub fn item(collection: &str, id: &str) -> String {
        format!("{}/{}", collection, id)
    }

    /// `/contact/{id}/read`
    pub fn contact_read(id: &str) -> String {
        format!("{}/{}/read", CONTACT, id)
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

pub const GENERIC_API_ERROR: &str = "API Error";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Could not obtain identity token: {0}")]
    Identity(IdentityError),

    /// Non-success HTTP status. `message` is the server-supplied text, if any.
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_API_ERROR))]
    Status { status: u16, message: Option<String> },

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text shown to the operator.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<IdentityError> for ApiError {
    fn from(e: IdentityError) -> Self {
        ApiError::Identity(e)
    }
}

/// Decode a JSON body into a typed record.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

//
// ──────────────────────────────────────────────────────────
// Upload payload
// ──────────────────────────────────────────────────────────
//

/// A single file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadAsset {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl UploadAsset {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }

    /// Explicit content type, else guessed from the file name.
    pub fn mime(&self) -> String {
        self.content_type.clone().unwrap_or_else(|| {
            mime_guess::from_path(&self.file_name)
                .first_or_octet_stream()
                .essence_str()
                .to_string()
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Authenticated access to the portfolio store. Paths are relative to the
/// configured base URL (e.g. `/projects`, `/projects/{id}`).
///
/// Implementations attach a freshly obtained bearer token to every call
/// and report failures as `ApiError` only; they never talk to the operator.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn read(&self, path: &str) -> Result<Value, ApiError>;

    async fn create(&self, path: &str, body: Value) -> Result<Value, ApiError>;

    async fn update(&self, path: &str, body: Value) -> Result<Value, ApiError>;

    async fn remove(&self, path: &str) -> Result<Value, ApiError>;

    /// Returns the URL of the stored asset.
    async fn upload_asset(&self, asset: UploadAsset) -> Result<String, ApiError>;
}
