//! Brevo transactional email client.

use async_trait::async_trait;
use std::time::Duration;

use super::models::{BrevoEmail, OutgoingEmail};
use super::{MailDispatcher, MailError};
use crate::config::MailConfig;

pub struct BrevoDispatcher {
    http_client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl BrevoDispatcher {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(MailError::Client)?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl MailDispatcher for BrevoDispatcher {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let payload = BrevoEmail::from(email);

        let response = self
            .http_client
            .post(&self.api_url)
            .header("api-key", &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        log::debug!(
            "Brevo accepted message '{}' with attachment {}",
            email.subject,
            email.attachment.filename
        );
        Ok(())
    }
}
