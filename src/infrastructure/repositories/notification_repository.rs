use crate::domain::tts::NotificationEvent;
use async_trait::async_trait;

/// Fire-and-forget publisher for new-synthesis events
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn publish(&self, event: &NotificationEvent) -> Result<(), String>;
}
