use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::models::MatchPair;

/// Errors that can occur when delivering a match notification
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Webhook request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Webhook returned status {0}")]
    BadStatus(u16),
}

/// Consumer of newly formed matches
///
/// Delivery is fire-and-forget with at-least-once semantics; the same pair
/// may be delivered more than once and consumers must dedup (the stored
/// match table already does, keyed on the normalized pair).
#[async_trait]
pub trait MatchNotifier: Send + Sync {
    async fn notify(&self, pair: &MatchPair) -> Result<(), NotifyError>;
}

/// Notifier that only logs; used when no webhook is configured
pub struct LogNotifier;

#[async_trait]
impl MatchNotifier for LogNotifier {
    async fn notify(&self, pair: &MatchPair) -> Result<(), NotifyError> {
        tracing::info!("New match: {} <-> {}", pair.dog_a, pair.dog_b);
        Ok(())
    }
}

/// Notifier that POSTs the matched pair to an external notification service
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String, timeout_secs: u64) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl MatchNotifier for WebhookNotifier {
    async fn notify(&self, pair: &MatchPair) -> Result<(), NotifyError> {
        let response = self.client.post(&self.url).json(pair).send().await?;

        if !response.status().is_success() {
            return Err(NotifyError::BadStatus(response.status().as_u16()));
        }

        tracing::debug!("Delivered match webhook for {} <-> {}", pair.dog_a, pair.dog_b);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_webhook_notifier_posts_pair() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/matches")
            .match_header("content-type", "application/json")
            .with_status(200)
            .create_async()
            .await;

        let notifier =
            WebhookNotifier::new(format!("{}/matches", server.url()), 5).unwrap();
        let pair = MatchPair::new(Uuid::new_v4(), Uuid::new_v4());

        notifier.notify(&pair).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_webhook_notifier_surfaces_bad_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/matches")
            .with_status(500)
            .create_async()
            .await;

        let notifier =
            WebhookNotifier::new(format!("{}/matches", server.url()), 5).unwrap();
        let pair = MatchPair::new(Uuid::new_v4(), Uuid::new_v4());

        match notifier.notify(&pair).await {
            Err(NotifyError::BadStatus(500)) => {}
            other => panic!("Expected BadStatus(500), got {:?}", other.err()),
        }
    }
}
