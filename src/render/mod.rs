//! Renderers - turn an assembled `Layout` into document bytes.
//!
//! Each output format implements `DocumentRenderer`:
//! - `PdfRenderer` - Typst markup compiled by the `typst` CLI
//! - `DocxRenderer` - WordprocessingML package written with `zip` + `quick-xml`
//! - `HtmlRenderer` - standalone HTML page
//! - `TextRenderer` - plain text with Arabic pre-shaped into visual order

pub mod common;
pub mod docx;
pub mod engine;
pub mod html;
pub mod pdf;
pub mod text;

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::layout::Layout;

pub use common::Assets;
pub use docx::DocxRenderer;
pub use engine::TypstRenderEngine;
pub use html::HtmlRenderer;
pub use pdf::PdfRenderer;
pub use text::TextRenderer;

/// Errors that can occur while rendering a document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteTypst(#[source] std::io::Error),
    #[error("Typst CLI execution failed: {0}")]
    TypstIo(#[source] std::io::Error),
    #[error("Typst CLI exited with status {0}")]
    TypstExit(i32),
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
    #[error("failed to write document XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("failed to write document archive: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

/// Output formats the service can attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Html,
    Text,
}

impl DocumentFormat {
    /// Get MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Html => "text/html",
            Self::Text => "text/plain",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Html => "html",
            Self::Text => "txt",
        }
    }

    /// Short name used in email subjects ("PDF ATTACHED: ...").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Html => "HTML",
            Self::Text => "TEXT",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" | "word" => Ok(Self::Docx),
            "html" | "htm" => Ok(Self::Html),
            "txt" | "text" => Ok(Self::Text),
            other => Err(format!("unsupported document format '{other}'")),
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Everything a renderer needs for one report.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub title: String,
    pub generated_at: DateTime<Local>,
    pub attachment_prefix: String,
    pub layout: Layout,
}

/// Result of a successful render.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
    pub filename: String,
}

impl RenderedDocument {
    pub fn new(bytes: Vec<u8>, format: DocumentFormat, request: &ReportRequest) -> Self {
        Self {
            bytes,
            format,
            filename: common::attachment_filename(
                &request.attachment_prefix,
                &request.generated_at,
                format,
            ),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// A document output format.
pub trait DocumentRenderer: Send + Sync {
    fn format(&self) -> DocumentFormat;

    /// Serialize the report. Missing optional assets never fail a render.
    fn render(&self, request: &ReportRequest) -> Result<RenderedDocument, RenderError>;
}

/// Build the renderer for a configured format.
pub fn renderer_for(format: DocumentFormat, assets: Assets) -> Arc<dyn DocumentRenderer> {
    match format {
        DocumentFormat::Pdf => Arc::new(PdfRenderer::new(assets)),
        DocumentFormat::Docx => Arc::new(DocxRenderer::new(assets)),
        DocumentFormat::Html => Arc::new(HtmlRenderer::new()),
        DocumentFormat::Text => Arc::new(TextRenderer::new()),
    }
}
