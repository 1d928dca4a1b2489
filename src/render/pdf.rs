//! PDF output through Typst.
//!
//! Typst shapes Arabic and runs the bidi algorithm itself, so values are
//! passed through unchanged and only marked with `dir: rtl`.

use std::fmt::Write as _;

use super::common::{escape_typst_string, format_report_date, Assets, HeaderImage};
use super::engine::TypstRenderEngine;
use super::{DocumentFormat, DocumentRenderer, RenderError, RenderedDocument, ReportRequest};
use crate::bidi::contains_arabic;

const HEADER_IMAGE_NAME: &str = "header.png";
const FONT_STACK: &str = r#"("Noto Naskh Arabic", "Amiri", "Noto Sans", "Libertinus Serif")"#;

/// Renders reports to PDF with the `typst` CLI.
pub struct PdfRenderer {
    assets: Assets,
}

impl PdfRenderer {
    pub fn new(assets: Assets) -> Self {
        Self { assets }
    }

    /// Typst source plus the header image it references, if one decoded.
    fn prepare(&self, request: &ReportRequest) -> (String, Option<HeaderImage>) {
        let header = self.assets.header_image();
        let source = Self::typst_source(request, header.is_some());
        (source, header)
    }

    /// Build the Typst source for a report.
    pub fn typst_source(request: &ReportRequest, with_header_image: bool) -> String {
        let mut source = String::new();

        let _ = writeln!(
            source,
            "#set document(title: \"{}\")",
            escape_typst_string(&request.title)
        );
        source.push_str("#set page(paper: \"a4\", margin: (x: 2cm, y: 2cm))\n");
        let _ = writeln!(source, "#set text(font: {FONT_STACK}, size: 10pt)");
        source.push_str("#show heading: set text(size: 13pt, fill: rgb(\"#1f4e79\"))\n\n");

        if with_header_image {
            let _ = writeln!(source, "#image(\"{HEADER_IMAGE_NAME}\", width: 100%)");
        }

        let _ = writeln!(
            source,
            "#align(center, text(size: 16pt, weight: \"bold\", \"{}\"))",
            escape_typst_string(&request.title)
        );
        let _ = writeln!(
            source,
            "#align(center, text(size: 10pt, fill: gray, \"{}\"))",
            escape_typst_string(&format_report_date(&request.generated_at))
        );
        source.push_str("#v(0.8em)\n");

        for block in request.layout.printable_sections() {
            let _ = writeln!(
                source,
                "\n#heading(level: 2, \"{}\")",
                escape_typst_string(&block.section.heading())
            );
            source.push_str("#table(\n  columns: (35%, 65%),\n  stroke: 0.5pt + luma(200),\n  inset: 6pt,\n");
            for row in block.visible_rows() {
                let _ = writeln!(
                    source,
                    "  text(weight: \"bold\", \"{}\"),\n  {},",
                    escape_typst_string(&row.label.display()),
                    value_cell(&row.value)
                );
            }
            source.push_str(")\n");
        }

        source
    }
}

fn value_cell(value: &str) -> String {
    let escaped = escape_typst_string(value.trim());
    if contains_arabic(value) {
        format!("align(right, text(dir: rtl, \"{escaped}\"))")
    } else {
        format!("text(fill: luma(60), \"{escaped}\")")
    }
}

impl DocumentRenderer for PdfRenderer {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn render(&self, request: &ReportRequest) -> Result<RenderedDocument, RenderError> {
        let (source, header) = self.prepare(request);

        let side_files: Vec<(&str, &[u8])> = header
            .as_ref()
            .map(|image| vec![(HEADER_IMAGE_NAME, image.bytes.as_slice())])
            .unwrap_or_default();
        let font_dir = self.assets.font_dir();

        let pdf = TypstRenderEngine::render(&source, &side_files, font_dir.as_deref())?;
        Ok(RenderedDocument::new(pdf, DocumentFormat::Pdf, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ReportRequest {
        let submission: crate::submission::Submission =
            [("FullName", "محمد علي")].into_iter().collect();
        ReportRequest {
            title: "Report".into(),
            generated_at: chrono::Local::now(),
            attachment_prefix: "DS-160_Submission".into(),
            layout: crate::layout::assemble(&submission),
        }
    }

    #[test]
    fn test_corrupt_header_image_is_left_out_of_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(Assets::HEADER_IMAGE), b"this is not an image").unwrap();

        let renderer = PdfRenderer::new(Assets::new(dir.path(), true));
        let (source, header) = renderer.prepare(&request());
        assert!(header.is_none());
        assert!(!source.contains("#image("));
    }

    #[test]
    fn test_valid_header_image_is_referenced() {
        let dir = tempfile::tempdir().unwrap();
        let mut png = Vec::new();
        image::RgbaImage::new(8, 2)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        std::fs::write(dir.path().join(Assets::HEADER_IMAGE), png).unwrap();

        let renderer = PdfRenderer::new(Assets::new(dir.path(), true));
        let (source, header) = renderer.prepare(&request());
        assert!(header.is_some());
        assert!(source.contains("#image(\"header.png\""));
    }

    #[test]
    fn test_value_cell_direction() {
        assert!(value_cell("محمد علي").contains("dir: rtl"));
        assert!(!value_cell("Cairo").contains("dir: rtl"));
    }

    #[test]
    fn test_value_cell_escapes_quotes() {
        assert_eq!(value_cell("say \"hi\""), "text(fill: luma(60), \"say \\\"hi\\\"\")");
    }
}
