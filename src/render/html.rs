//! Standalone HTML output. Browsers handle RTL, values only get `dir="rtl"`.

use std::fmt::Write as _;

use super::common::{escape_html, format_report_date};
use super::{DocumentFormat, DocumentRenderer, RenderError, RenderedDocument, ReportRequest};
use crate::bidi::contains_arabic;

const STYLE: &str = "body{font-family:'Segoe UI',Tahoma,Arial,sans-serif;margin:2em;color:#222}\
h1{text-align:center;font-size:1.4em}\
.date{text-align:center;color:#777}\
h2{color:#1f4e79;border-bottom:1px solid #ccc;padding-bottom:.2em}\
table{width:100%;border-collapse:collapse}\
td{border:1px solid #ddd;padding:.4em;vertical-align:top}\
td.label{width:35%;font-weight:bold}\
td[dir=rtl]{text-align:right}";

pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn html(request: &ReportRequest) -> String {
        let mut page = String::new();
        let title = escape_html(&request.title);

        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(page, "<title>{title}</title>");
        let _ = writeln!(page, "<style>{STYLE}</style>");
        page.push_str("</head>\n<body>\n");
        let _ = writeln!(page, "<h1>{title}</h1>");
        let _ = writeln!(
            page,
            "<p class=\"date\">{}</p>",
            escape_html(&format_report_date(&request.generated_at))
        );

        for block in request.layout.printable_sections() {
            let _ = writeln!(page, "<h2>{}</h2>\n<table>", escape_html(&block.section.heading()));
            for row in block.visible_rows() {
                let dir = if contains_arabic(&row.value) { "rtl" } else { "auto" };
                let value = escape_html(row.value.trim()).replace('\n', "<br>");
                let _ = writeln!(
                    page,
                    "<tr><td class=\"label\" dir=\"auto\">{}</td><td dir=\"{dir}\">{value}</td></tr>",
                    escape_html(&row.label.display())
                );
            }
            page.push_str("</table>\n");
        }

        page.push_str("</body>\n</html>\n");
        page
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Html
    }

    fn render(&self, request: &ReportRequest) -> Result<RenderedDocument, RenderError> {
        Ok(RenderedDocument::new(
            Self::html(request).into_bytes(),
            DocumentFormat::Html,
            request,
        ))
    }
}
