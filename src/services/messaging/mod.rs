pub mod slack;

use async_trait::async_trait;

#[async_trait]
pub trait MessagingProvider: Send + Sync {
    async fn send_message(&self, channel: &str, text: &str) -> anyhow::Result<()>;
}
