//! Plain-text output.
//!
//! Text viewers and fixed-width canvases draw code points left to right, so
//! Arabic values are shaped and put in visual order before they are written.

use std::fmt::Write as _;

use super::common::format_report_date;
use super::{DocumentFormat, DocumentRenderer, RenderError, RenderedDocument, ReportRequest};
use crate::bidi::prepare_for_visual;

const RULE_WIDTH: usize = 60;

pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn text(request: &ReportRequest) -> String {
        let mut out = String::new();
        let rule = "=".repeat(RULE_WIDTH);

        let _ = writeln!(out, "{}", request.title);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(
            out,
            "Date: {}",
            prepare_for_visual(&format_report_date(&request.generated_at))
        );

        for block in request.layout.printable_sections() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", prepare_for_visual(&block.section.heading()));
            let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
            for row in block.visible_rows() {
                let _ = writeln!(
                    out,
                    "• {}: {}",
                    prepare_for_visual(&row.label.display()),
                    prepare_for_visual(row.value.trim())
                );
            }
        }

        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for TextRenderer {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Text
    }

    fn render(&self, request: &ReportRequest) -> Result<RenderedDocument, RenderError> {
        Ok(RenderedDocument::new(
            Self::text(request).into_bytes(),
            DocumentFormat::Text,
            request,
        ))
    }
}
