pub mod handlers;
pub mod models;
pub mod service;

use thiserror::Error;

use crate::mail::MailError;
use crate::render::RenderError;

pub use models::{FieldValue, SubmitResponse, Submission, SubmittedField};
pub use service::{DeliveryReceipt, ReportSettings, SubmissionService};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("document rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("email dispatch failed: {0}")]
    Dispatch(#[from] MailError),
    #[error("rendering task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
