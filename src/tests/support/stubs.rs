use async_trait::async_trait;
use mockall::mock;
use std::sync::Mutex;

use crate::auth::application::domain::entities::AdminUser;
use crate::auth::application::ports::outgoing::{IdentityError, IdentityProvider};
use crate::shared::ui::UserPrompt;

mock! {
    pub Identity {}

    #[async_trait]
    impl IdentityProvider for Identity {
        fn current_user(&self) -> Option<AdminUser>;
        async fn id_token(&self) -> Result<Option<String>, IdentityError>;
        async fn sign_in(&self, email: &str, password: &str) -> Result<AdminUser, IdentityError>;
        async fn sign_out(&self) -> Result<(), IdentityError>;
    }
}

/// Answers every confirmation with a fixed choice and records what the
/// view-models said.
pub struct RecordingPrompt {
    answer: bool,
    alerts: Mutex<Vec<String>>,
    questions: Mutex<Vec<String>>,
}

impl RecordingPrompt {
    pub fn confirming(answer: bool) -> Self {
        Self {
            answer,
            alerts: Mutex::new(Vec::new()),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserPrompt for RecordingPrompt {
    async fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    async fn confirm(&self, question: &str) -> bool {
        self.questions.lock().unwrap().push(question.to_string());
        self.answer
    }
}
