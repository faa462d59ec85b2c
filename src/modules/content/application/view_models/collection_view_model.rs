use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::api::application::ports::outgoing::{decode, endpoints, AdminApi, ApiError, UploadAsset};
use crate::content::domain::entity::keep_wire_nulls;
use crate::content::domain::{AdminEntity, DraftError, EntityDraft};
use crate::shared::ui::UserPrompt;

use super::busy_flag::BusyFlag;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewModelError {
    #[error(transparent)]
    Validation(#[from] DraftError),

    /// A save is already running for this view.
    #[error("A save is already in progress")]
    Busy,

    #[error("A {0} has no image or icon to upload")]
    NoAssetField(&'static str),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub const DELETE_CONFIRMATION: &str = "Are you sure?";

//
// ──────────────────────────────────────────────────────────
// View-model
// ──────────────────────────────────────────────────────────
//

/// List screen state for one collection: the cached items plus the
/// create/edit form.
///
/// `items` mirrors the server and is only ever replaced by a successful
/// `load()`. Every successful mutation is followed by exactly one reload.
/// The stored records are kept next to `items` so an edit can send back
/// `null`s the typed entity reads as blanks.
pub struct CollectionViewModel<E: AdminEntity> {
    api: Arc<dyn AdminApi>,
    prompt: Arc<dyn UserPrompt>,
    items: Vec<E>,
    wire: Vec<Value>,
    draft: E::Draft,
    editing: Option<E>,
    editing_wire: Option<Value>,
    form_visible: bool,
    saving: bool,
    uploading: bool,
}

impl<E: AdminEntity> CollectionViewModel<E> {
    pub fn new(api: Arc<dyn AdminApi>, prompt: Arc<dyn UserPrompt>) -> Self {
        Self {
            api,
            prompt,
            items: Vec::new(),
            wire: Vec::new(),
            draft: E::Draft::default(),
            editing: None,
            editing_wire: None,
            form_visible: false,
            saving: false,
            uploading: false,
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn draft(&self) -> &E::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut E::Draft {
        &mut self.draft
    }

    /// `None` means the form creates a new record.
    pub fn editing_target(&self) -> Option<&E> {
        self.editing.as_ref()
    }

    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Replace `items` with the server's collection. On failure the previous
    /// items stay and the error is only logged.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        let fetched = self
            .api
            .read(E::COLLECTION)
            .await
            .and_then(decode::<Vec<Value>>)
            .and_then(|records| {
                let items = records
                    .iter()
                    .cloned()
                    .map(decode::<E>)
                    .collect::<Result<Vec<E>, _>>()?;
                Ok((records, items))
            });

        match fetched {
            Ok((records, items)) => {
                self.wire = records;
                self.items = items;
                Ok(())
            }
            Err(e) => {
                warn!(
                    collection = E::COLLECTION,
                    error = %e,
                    "Failed to load {}s, keeping previous list",
                    E::LABEL
                );
                Err(e)
            }
        }
    }

    pub fn start_create(&mut self) {
        self.draft = E::Draft::default();
        self.editing = None;
        self.editing_wire = None;
        self.form_visible = true;
    }

    pub fn start_edit(&mut self, item: &E) {
        self.draft = E::Draft::from_entity(item);
        self.editing = Some(item.clone());
        self.editing_wire = self
            .wire
            .iter()
            .find(|record| record.get("id").and_then(Value::as_str) == Some(item.id()))
            .cloned();
        self.form_visible = true;
    }

    pub fn cancel(&mut self) {
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.draft = E::Draft::default();
        self.editing = None;
        self.editing_wire = None;
        self.form_visible = false;
    }

    /// Create or update from the current draft.
    ///
    /// On failure the form stays open with the draft untouched so the
    /// operator can retry.
    pub async fn submit(&mut self) -> Result<(), ViewModelError> {
        if self.saving {
            return Err(ViewModelError::Busy);
        }
        self.draft.validate()?;

        let mut body = self.draft.to_payload();
        if let Some(wire) = &self.editing_wire {
            keep_wire_nulls(&mut body, wire);
        }

        let outcome = {
            let _saving = BusyFlag::raise(&mut self.saving);
            match &self.editing {
                Some(target) => {
                    self.api
                        .update(&endpoints::item(E::COLLECTION, target.id()), body)
                        .await
                }
                None => self.api.create(E::COLLECTION, body).await,
            }
        };

        match outcome {
            Ok(_) => {
                info!(collection = E::COLLECTION, "Saved {}", E::LABEL);
                self.reset_form();
                let _ = self.load().await;
                Ok(())
            }
            Err(e) => {
                error!(collection = E::COLLECTION, error = %e, "Failed to save {}", E::LABEL);
                self.prompt.alert(&format!("Error: {}", e.message())).await;
                Err(e.into())
            }
        }
    }

    /// Delete after the operator confirms. `Ok(false)` when they decline.
    pub async fn delete_item(&mut self, id: &str) -> Result<bool, ViewModelError> {
        if !self.prompt.confirm(DELETE_CONFIRMATION).await {
            return Ok(false);
        }

        if let Err(e) = self.api.remove(&endpoints::item(E::COLLECTION, id)).await {
            error!(collection = E::COLLECTION, id = %id, error = %e, "Failed to delete {}", E::LABEL);
            self.prompt.alert(&format!("Error: {}", e.message())).await;
            return Err(e.into());
        }

        info!(collection = E::COLLECTION, id = %id, "Deleted {}", E::LABEL);
        let _ = self.load().await;
        Ok(true)
    }

    /// Upload a file and put its URL into the draft's image/icon field.
    pub async fn attach_asset(&mut self, asset: UploadAsset) -> Result<(), ViewModelError> {
        if self.draft.asset_field().is_none() {
            return Err(ViewModelError::NoAssetField(E::LABEL));
        }

        let outcome = {
            let _uploading = BusyFlag::raise(&mut self.uploading);
            self.api.upload_asset(asset).await
        };

        match outcome {
            Ok(url) => {
                if let Some(field) = self.draft.asset_field() {
                    *field = url;
                }
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
