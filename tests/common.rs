#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, TimeZone};

use visa_form_mailer::layout::assemble;
use visa_form_mailer::mail::{MailDispatcher, MailError, Mailbox, OutgoingEmail};
use visa_form_mailer::render::{
    DocumentFormat, DocumentRenderer, RenderError, RenderedDocument, ReportRequest,
};
use visa_form_mailer::submission::{ReportSettings, Submission, SubmissionService};

/// Dispatcher that keeps every email in memory.
pub struct RecordingDispatcher {
    sent: tokio::sync::Mutex<Vec<OutgoingEmail>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self {
            sent: tokio::sync::Mutex::new(Vec::new()),
        }
    }

    pub async fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl MailDispatcher for RecordingDispatcher {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().await.push(email.clone());
        Ok(())
    }
}

/// Dispatcher that behaves like an API rejecting the key.
pub struct FailingDispatcher {
    attempts: AtomicUsize,
}

impl FailingDispatcher {
    pub fn new() -> Self {
        Self {
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MailDispatcher for FailingDispatcher {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), MailError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(MailError::Rejected {
            status: 401,
            body: r#"{"code":"unauthorized","message":"Key not found"}"#.into(),
        })
    }
}

/// Wraps a renderer and counts how often it ran.
pub struct CountingRenderer {
    inner: Arc<dyn DocumentRenderer>,
    calls: AtomicUsize,
}

impl CountingRenderer {
    pub fn new(inner: Arc<dyn DocumentRenderer>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DocumentRenderer for CountingRenderer {
    fn format(&self) -> DocumentFormat {
        self.inner.format()
    }

    fn render(&self, request: &ReportRequest) -> Result<RenderedDocument, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.render(request)
    }
}

/// Renderer that fails like a host without the Typst CLI.
pub struct FailingRenderer {
    calls: AtomicUsize,
}

impl FailingRenderer {
    pub const CAUSE: &'static str = "typst: command not found";

    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DocumentRenderer for FailingRenderer {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn render(&self, _request: &ReportRequest) -> Result<RenderedDocument, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RenderError::TypstIo(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            Self::CAUSE,
        )))
    }
}

pub fn test_settings() -> ReportSettings {
    ReportSettings {
        title: "DS-160 Survey Submission Report".into(),
        attachment_prefix: "DS-160_Submission".into(),
        sender: Mailbox::named("DS-160 Form", "no-reply@example.com"),
        recipient: Mailbox::new("visa-desk@example.com"),
    }
}

pub fn test_service(
    renderer: Arc<dyn DocumentRenderer>,
    dispatcher: Arc<dyn MailDispatcher>,
) -> SubmissionService {
    SubmissionService::new(renderer, dispatcher, test_settings())
}

/// A realistic bilingual submission touching most sections.
pub fn sample_submission() -> Submission {
    serde_json::from_value(serde_json::json!({
        "_formVersion": "2024-09",
        "FullName": "محمد أحمد",
        "FirstName_Arabic": "محمد",
        "Nationality": "Egypt",
        "Email": "mohamed@example.com",
        "Phone": "+20 100 000 0000",
        "CompanionName": "Sara Ahmed",
        "PreviousUSVisit": "No",
        "FatherName": "Ahmed Ali",
        "Current_Workplace": "Cairo Bank",
        "PreviousEmployer": "Nile Trading",
        "UniversityName": "Cairo University",
        "CountriesVisited": ["France", null, "Japan"],
        "MiddleName": "",
        "FavouriteColour": "Blue"
    }))
    .expect("sample submission is a JSON object")
}

/// Report request with a fixed timestamp.
pub fn sample_request() -> ReportRequest {
    ReportRequest {
        title: "DS-160 Survey Submission Report".into(),
        generated_at: Local
            .with_ymd_and_hms(2026, 10, 19, 9, 30, 0)
            .single()
            .expect("valid local time"),
        attachment_prefix: "DS-160_Submission".into(),
        layout: assemble(&sample_submission()),
    }
}
