use serde_json::json;
use std::sync::Arc;
use tracing::{error, warn};

use crate::api::application::ports::outgoing::{decode, endpoints, AdminApi, ApiError};
use crate::content::domain::ContactMessage;
use crate::shared::ui::UserPrompt;

use super::collection_view_model::ViewModelError;

/// Inbox screen. The only mutation is marking a message as read, which
/// patches the one item in place instead of reloading the list.
pub struct MessagesViewModel {
    api: Arc<dyn AdminApi>,
    prompt: Arc<dyn UserPrompt>,
    items: Vec<ContactMessage>,
}

impl MessagesViewModel {
    pub fn new(api: Arc<dyn AdminApi>, prompt: Arc<dyn UserPrompt>) -> Self {
        Self {
            api,
            prompt,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[ContactMessage] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|m| !m.read).count()
    }

    pub async fn load(&mut self) -> Result<(), ApiError> {
        match self
            .api
            .read(endpoints::CONTACT)
            .await
            .and_then(decode::<Vec<ContactMessage>>)
        {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load messages, keeping previous list");
                Err(e)
            }
        }
    }

    /// Marks an unread message as read. Already-read or unknown ids are a
    /// no-op that sends nothing.
    pub async fn mark_read(&mut self, id: &str) -> Result<(), ViewModelError> {
        let unread = self.items.iter().any(|m| m.id == id && !m.read);
        if !unread {
            return Ok(());
        }

        if let Err(e) = self.api.update(&endpoints::contact_read(id), json!({})).await {
            error!(id = %id, error = %e, "Failed to mark message as read");
            self.prompt.alert(&format!("Error: {}", e.message())).await;
            return Err(e.into());
        }

        if let Some(message) = self.items.iter_mut().find(|m| m.id == id) {
            message.read = true;
        }
        Ok(())
    }
}
