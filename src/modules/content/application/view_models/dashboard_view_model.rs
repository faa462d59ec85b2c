use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use crate::api::application::ports::outgoing::{decode, endpoints, AdminApi};
use crate::content::domain::ContactMessage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub projects: usize,
    pub blog_posts: usize,
    pub unread_messages: usize,
}

/// Landing page counters. Each source is fetched independently and a
/// failed one simply counts as empty.
pub struct DashboardViewModel {
    api: Arc<dyn AdminApi>,
    stats: DashboardStats,
}

impl DashboardViewModel {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self {
            api,
            stats: DashboardStats::default(),
        }
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    pub async fn load(&mut self) -> DashboardStats {
        let (projects, blogs, messages) = futures::join!(
            self.fetch_list::<Value>(endpoints::PROJECTS),
            self.fetch_list::<Value>(endpoints::BLOGS),
            self.fetch_list::<ContactMessage>(endpoints::CONTACT),
        );

        self.stats = DashboardStats {
            projects: projects.len(),
            blog_posts: blogs.len(),
            unread_messages: messages.iter().filter(|m| !m.read).count(),
        };
        self.stats
    }

    async fn fetch_list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Vec<T> {
        match self.api.read(path).await.and_then(decode::<Vec<T>>) {
            Ok(items) => items,
            Err(e) => {
                warn!(path = %path, error = %e, "Dashboard source unavailable, counting as empty");
                Vec::new()
            }
        }
    }
}
