use async_trait::async_trait;

/// Presentation port for interactions that block the operator until answered.
///
/// View-models call this for write failures and destructive confirmations;
/// the transport layer never does.
#[async_trait]
pub trait UserPrompt: Send + Sync {
    /// Show a message the operator has to acknowledge.
    async fn alert(&self, message: &str);

    /// Ask a yes/no question. `true` means the operator confirmed.
    async fn confirm(&self, question: &str) -> bool;
}
