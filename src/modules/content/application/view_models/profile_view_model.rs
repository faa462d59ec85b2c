use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::api::application::ports::outgoing::{decode, endpoints, AdminApi, ApiError, UploadAsset};
use crate::content::domain::entity::keep_wire_nulls;
use crate::content::domain::Profile;
use crate::shared::ui::UserPrompt;

use super::busy_flag::BusyFlag;
use super::collection_view_model::ViewModelError;

pub const PROFILE_SAVED: &str = "Profile updated successfully!";
pub const PROFILE_SAVE_FAILED: &str = "Failed to update profile";

/// The "About" screen: one record, fetched once and edited in place.
pub struct ProfileViewModel {
    api: Arc<dyn AdminApi>,
    prompt: Arc<dyn UserPrompt>,
    profile: Profile,
    /// The stored record as last fetched.
    wire: Option<Value>,
    loading: bool,
    saving: bool,
    uploading: bool,
}

impl ProfileViewModel {
    pub fn new(api: Arc<dyn AdminApi>, prompt: Arc<dyn UserPrompt>) -> Self {
        Self {
            api,
            prompt,
            profile: Profile::default(),
            wire: None,
            loading: true,
            saving: false,
            uploading: false,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// A missing or blank stored profile leaves the defaults in place.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        let fetched = self.api.read(endpoints::ABOUT).await.and_then(|body| match body {
            Value::Null => Ok(None),
            other => decode::<Profile>(other.clone()).map(|profile| Some((profile, other))),
        });
        self.loading = false;

        match fetched {
            Ok(Some((profile, wire))) if !profile.is_blank() => {
                self.profile = profile;
                self.wire = Some(wire);
                Ok(())
            }
            Ok(_) => {
                info!("No profile stored yet, using defaults");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load profile");
                Err(e)
            }
        }
    }

    pub async fn save(&mut self) -> Result<(), ViewModelError> {
        if self.saving {
            return Err(ViewModelError::Busy);
        }
        self.profile.validate()?;

        let mut body = match serde_json::to_value(&self.profile) {
            Ok(body) => body,
            Err(e) => return Err(ApiError::MalformedBody(e.to_string()).into()),
        };
        if let Some(wire) = &self.wire {
            keep_wire_nulls(&mut body, wire);
        }

        let outcome = {
            let _saving = BusyFlag::raise(&mut self.saving);
            self.api.update(endpoints::ABOUT, body.clone()).await
        };

        match outcome {
            Ok(_) => {
                self.wire = Some(body);
                self.prompt.alert(PROFILE_SAVED).await;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to update profile");
                self.prompt.alert(PROFILE_SAVE_FAILED).await;
                Err(e.into())
            }
        }
    }

    pub async fn attach_asset(&mut self, asset: UploadAsset) -> Result<(), ViewModelError> {
        let outcome = {
            let _uploading = BusyFlag::raise(&mut self.uploading);
            self.api.upload_asset(asset).await
        };

        match outcome {
            Ok(url) => {
                self.profile.image = url;
                Ok(())
            }
            Err(e) => {
                self.prompt
                    .alert(&format!("Upload Error: {}", e.message()))
                    .await;
                Err(e.into())
            }
        }
    }
}
