//! Submission processing: layout, rendering and email dispatch for one request.

use std::sync::Arc;

use chrono::Local;

use super::models::Submission;
use super::SubmitError;
use crate::config::AppConfig;
use crate::layout::assemble;
use crate::mail::{Attachment, BrevoDispatcher, MailDispatcher, MailError, Mailbox, OutgoingEmail};
use crate::render::{renderer_for, DocumentRenderer, RenderedDocument, ReportRequest};

const SUBJECT_FALLBACK_NAME: &str = "Client";

/// Static parts of every report and notification email.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub title: String,
    pub attachment_prefix: String,
    pub sender: Mailbox,
    pub recipient: Mailbox,
}

impl ReportSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            title: config.document.title.clone(),
            attachment_prefix: config.document.attachment_prefix.clone(),
            sender: Mailbox::named(&config.mail.sender_name, &config.mail.sender_email),
            recipient: Mailbox::new(&config.mail.recipient_email),
        }
    }
}

/// Summary of a delivered submission.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReceipt {
    pub filename: String,
    pub sections: usize,
    pub rows: usize,
}

/// Renders a submission and emails it. Holds no per-request state.
#[derive(Clone)]
pub struct SubmissionService {
    renderer: Arc<dyn DocumentRenderer>,
    dispatcher: Arc<dyn MailDispatcher>,
    settings: ReportSettings,
}

impl SubmissionService {
    pub fn new(
        renderer: Arc<dyn DocumentRenderer>,
        dispatcher: Arc<dyn MailDispatcher>,
        settings: ReportSettings,
    ) -> Self {
        Self {
            renderer,
            dispatcher,
            settings,
        }
    }

    /// Wire the configured renderer and the Brevo dispatcher.
    pub fn from_config(config: &AppConfig) -> Result<Self, MailError> {
        let renderer = renderer_for(config.document.format, config.document.assets());
        let dispatcher = Arc::new(BrevoDispatcher::new(&config.mail)?);
        Ok(Self::new(renderer, dispatcher, ReportSettings::from_config(config)))
    }

    /// Classify and group the submission into a report request.
    pub fn build_report(&self, submission: &Submission) -> ReportRequest {
        ReportRequest {
            title: self.settings.title.clone(),
            generated_at: Local::now(),
            attachment_prefix: self.settings.attachment_prefix.clone(),
            layout: assemble(submission),
        }
    }

    /// Render on the blocking pool; the PDF renderer waits on a child process.
    pub async fn render(&self, report: ReportRequest) -> Result<RenderedDocument, SubmitError> {
        let renderer = Arc::clone(&self.renderer);
        let document = tokio::task::spawn_blocking(move || renderer.render(&report)).await??;
        Ok(document)
    }

    pub fn compose_email(&self, submission: &Submission, document: RenderedDocument) -> OutgoingEmail {
        let format = document.format.label();
        let name = submission
            .applicant_name()
            .unwrap_or_else(|| SUBJECT_FALLBACK_NAME.to_string());

        OutgoingEmail {
            sender: self.settings.sender.clone(),
            to: vec![self.settings.recipient.clone()],
            subject: format!("{format} ATTACHED: DS-160 Submission - {name}"),
            html_content: format!(
                "<p>The detailed DS-160 survey submission is attached as a {format} file.</p>"
            ),
            attachment: Attachment::from_document(document),
        }
    }

    /// Run the whole pipeline for one submission. No retries.
    pub async fn process(&self, submission: &Submission) -> Result<DeliveryReceipt, SubmitError> {
        let report = self.build_report(submission);
        let sections = report.layout.printable_sections().count();
        let rows = report.layout.visible_row_count();
        log::debug!(
            "Assembled {} fields into {} printable sections ({} visible rows)",
            report.layout.row_count(),
            sections,
            rows
        );

        let document = self.render(report).await?;
        log::debug!(
            "Rendered {} ({} bytes)",
            document.filename,
            document.bytes.len()
        );

        let email = self.compose_email(submission, document);
        self.dispatcher.send(&email).await?;

        Ok(DeliveryReceipt {
            filename: email.attachment.filename,
            sections,
            rows,
        })
    }
}
