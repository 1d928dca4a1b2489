//! Outbound email delivery.

pub mod brevo;
pub mod models;

use async_trait::async_trait;
use thiserror::Error;

pub use brevo::BrevoDispatcher;
pub use models::{Attachment, Mailbox, OutgoingEmail};

#[derive(Debug, Error)]
pub enum MailError {
    #[error("failed to build email HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("email API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("email API rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Sends a prepared email. Implementations make a single attempt.
#[async_trait]
pub trait MailDispatcher: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}
