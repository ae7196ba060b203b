use super::notification_repository::NotificationRepository;
use crate::domain::tts::NotificationEvent;
use async_trait::async_trait;
use aws_sdk_sns::{error::DisplayErrorContext, Client as SnsClient};
use std::sync::Arc;

/// AWS SNS topic publisher
pub struct SnsNotificationRepository {
    sns_client: Arc<SnsClient>,
    topic_arn: String,
}

impl SnsNotificationRepository {
    pub fn new(sns_client: Arc<SnsClient>, topic_arn: String) -> Self {
        Self { sns_client, topic_arn }
    }
}

#[async_trait]
impl NotificationRepository for SnsNotificationRepository {
    async fn publish(&self, event: &NotificationEvent) -> Result<(), String> {
        let output = self
            .sns_client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(event.subject())
            .message(event.message())
            .send()
            .await
            .map_err(|e| format!("SNS Publish error: {}", DisplayErrorContext(&e)))?;

        tracing::debug!(
            topic_arn = %self.topic_arn,
            message_id = output.message_id().unwrap_or_default(),
            key = %event.key,
            "Notification published"
        );

        Ok(())
    }
}
