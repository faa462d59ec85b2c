// src/shared/api/response.rs
use serde::Deserialize;

/// Error body shapes the admin API may reply with on a failed write.
///
/// Accepts a flat `{ "message": "..." }` as well as the enveloped
/// `{ "success": false, "error": { "code": "...", "message": "..." } }`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorPayload {
    /// Best-effort parse; anything unreadable yields no message.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Flat message first, then the envelope's message, then its code.
    pub fn into_message(self) -> Option<String> {
        let nonblank = |m: &String| !m.trim().is_empty();
        self.message.filter(nonblank).or_else(|| {
            self.error
                .and_then(|e| e.message.filter(nonblank).or(e.code.filter(nonblank)))
        })
    }
}

/// Reply of the upload endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}
